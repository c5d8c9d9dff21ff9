use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use crate::check::structure_bug;

/// A node in the doubly linked list
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: *mut Node<T>,
    pub(crate) next: *mut Node<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        })
    }
}

/// A doubly linked list implementation using unsafe raw pointers
///
/// The list is the sole owner of its nodes: ownership flows head to tail
/// through the `next` chain, while `prev` is a non-owning backreference used
/// only for reverse relinking. No API hands out node pointers.
pub struct List<T> {
    pub(crate) head: *mut Node<T>,
    pub(crate) tail: *mut Node<T>,
    pub(crate) len: usize,
}

// The list owns all of its nodes, so sending or sharing it is exactly
// sending or sharing its elements. Callers that share a list across threads
// must still serialize mutation externally.
unsafe impl<T: Send> Send for List<T> {}
unsafe impl<T: Sync> Sync for List<T> {}

impl<T> List<T> {
    /// Creates a new empty doubly linked list
    pub fn new() -> Self {
        List {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    /// Returns the length of the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds an element to the front of the list
    pub fn push_front(&mut self, value: T) {
        let new_node = Box::into_raw(Node::new(value));

        unsafe {
            if self.head.is_null() {
                // Empty list
                self.tail = new_node;
            } else {
                (*self.head).prev = new_node;
                (*new_node).next = self.head;
            }
            self.head = new_node;
        }

        self.len += 1;
    }

    /// Adds an element to the back of the list
    pub fn push_back(&mut self, value: T) {
        let new_node = Box::into_raw(Node::new(value));

        unsafe {
            if self.tail.is_null() {
                // Empty list
                self.head = new_node;
            } else {
                (*self.tail).next = new_node;
                (*new_node).prev = self.tail;
            }
            self.tail = new_node;
        }

        self.len += 1;
    }

    /// Removes and returns the element from the front of the list
    /// Returns None if the list is empty (popping an empty list is a no-op,
    /// not an error)
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }

        unsafe {
            let old_head = self.head;
            self.head = (*old_head).next;

            if self.head.is_null() {
                // This was the only node
                self.tail = ptr::null_mut();
                self.len -= 1;
                if self.len != 0 {
                    structure_bug("pop_front");
                }
            } else {
                (*self.head).prev = ptr::null_mut();
                self.len -= 1;
            }

            let boxed_node = Box::from_raw(old_head);
            Some(boxed_node.value)
        }
    }

    /// Removes and returns the element from the back of the list
    /// Returns None if the list is empty (popping an empty list is a no-op,
    /// not an error)
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail.is_null() {
            return None;
        }

        unsafe {
            let old_tail = self.tail;
            self.tail = (*old_tail).prev;

            if self.tail.is_null() {
                // This was the only node
                self.head = ptr::null_mut();
                self.len -= 1;
                if self.len != 0 {
                    structure_bug("pop_back");
                }
            } else {
                (*self.tail).next = ptr::null_mut();
                self.len -= 1;
            }

            let boxed_node = Box::from_raw(old_tail);
            Some(boxed_node.value)
        }
    }

    /// Returns a reference to the front element without removing it
    /// Returns None if the list is empty
    pub fn front(&self) -> Option<&T> {
        if self.head.is_null() {
            None
        } else {
            unsafe { Some(&(*self.head).value) }
        }
    }

    /// Returns a mutable reference to the front element without removing it
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head.is_null() {
            None
        } else {
            unsafe { Some(&mut (*self.head).value) }
        }
    }

    /// Returns a reference to the back element without removing it
    /// Returns None if the list is empty
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_null() {
            None
        } else {
            unsafe { Some(&(*self.tail).value) }
        }
    }

    /// Returns a mutable reference to the back element without removing it
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail.is_null() {
            None
        } else {
            unsafe { Some(&mut (*self.tail).value) }
        }
    }

    /// Removes all elements from the list by popping from the back
    pub fn clear(&mut self) {
        while self.pop_back().is_some() {}

        if self.len != 0 {
            structure_bug("clear");
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    /// Deep copy: replicates the contents element by element so all node
    /// links belong to the new list
    fn clone(&self) -> Self {
        let mut copy = List::new();
        for value in self.iter() {
            copy.push_back(value.clone());
        }
        copy
    }

    /// Replaces the previous contents, releasing them before copying
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for value in source.iter() {
            self.push_back(value.clone());
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        // Different lengths cannot have the same contents.
        if self.len != other.len {
            return false;
        }

        let mut a = self.head;
        let mut b = other.head;
        while !a.is_null() {
            // Both chains claimed the same length, so running out of nodes
            // on one side mid-walk means a corrupted list, not inequality.
            if b.is_null() {
                structure_bug("eq");
            }
            unsafe {
                if (*a).value != (*b).value {
                    return false;
                }
                a = (*a).next;
                b = (*b).next;
            }
        }
        if !b.is_null() {
            structure_bug("eq");
        }

        true
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Display> fmt::Display for List<T> {
    /// Renders as a bracketed sequence of parenthesized elements,
    /// e.g. `[(1)(2)(3)]`; the empty list renders `[]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for value in self.iter() {
            write!(f, "({value})")?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// An iterator over the doubly linked list that consumes the list
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An iterator over the doubly linked list that borrows the list
pub struct Iter<'a, T> {
    current: *mut Node<T>,
    _marker: PhantomData<&'a T>,
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_null() {
            return None;
        }

        unsafe {
            let value = &(*self.current).value;
            self.current = (*self.current).next;
            Some(value)
        }
    }
}

/// A mutable iterator over the doubly linked list that borrows the list mutably
pub struct IterMut<'a, T> {
    current: *mut Node<T>,
    _marker: PhantomData<&'a mut T>,
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_null() {
            return None;
        }

        unsafe {
            let value = &mut (*self.current).value;
            let next = (*self.current).next;
            self.current = next;
            Some(value)
        }
    }
}

impl<T> List<T> {
    /// Returns an iterator over the list that borrows the list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head,
            _marker: PhantomData,
        }
    }

    /// Returns a mutable iterator over the list that borrows the list mutably
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            current: self.head,
            _marker: PhantomData,
        }
    }
}
