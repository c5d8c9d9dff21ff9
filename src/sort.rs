use crate::check::structure_bug;
use crate::list::{List, Node};

impl<T: Ord> List<T> {
    /// Inserts the value ahead of the first strictly greater element,
    /// keeping an already sorted list sorted. A new element equal to
    /// existing ones lands after them. Linear time.
    pub fn insert_ordered(&mut self, value: T) {
        let mut cur = self.head;
        while !cur.is_null() && unsafe { (*cur).value <= value } {
            cur = unsafe { (*cur).next };
        }

        if cur.is_null() {
            // Walked off the end, or the list was empty
            self.push_back(value);
        } else if cur == self.head {
            self.push_front(value);
        } else {
            // Splice strictly inside the chain, ahead of cur
            unsafe {
                let node = Box::into_raw(Node::new(value));
                let prev = (*cur).prev;

                (*node).prev = prev;
                (*node).next = cur;
                (*prev).next = node;
                (*cur).prev = node;
            }
            self.len += 1;
        }
    }

    /// Returns true if every adjacent pair is in non-decreasing order.
    /// Lists of fewer than two elements are trivially sorted.
    pub fn is_sorted(&self) -> bool {
        if self.len < 2 {
            return true;
        }
        if self.head.is_null() {
            structure_bug("is_sorted");
        }

        unsafe {
            let mut prev = self.head;
            let mut cur = (*prev).next;
            while !cur.is_null() {
                if (*prev).value > (*cur).value {
                    return false;
                }
                prev = cur;
                cur = (*cur).next;
            }
        }

        true
    }

    /// Merges two sorted lists into one sorted list, consuming both. When
    /// the next elements compare equal the one from `self` is taken first,
    /// so merging is stable.
    pub fn merge(mut self, mut other: Self) -> Self {
        let mut merged = List::new();

        loop {
            let take_other = match (self.front(), other.front()) {
                (None, None) => break,
                (Some(_), None) => false,
                (None, Some(_)) => true,
                (Some(a), Some(b)) => b < a,
            };

            let value = if take_other {
                other.pop_front()
            } else {
                self.pop_front()
            };

            match value {
                Some(value) => merged.push_back(value),
                // front() just said this side was non-empty
                None => structure_bug("merge"),
            }
        }

        merged
    }
}

impl<T: Clone> List<T> {
    /// Copies the list and splits the copy in half, leaving the original
    /// untouched. The left half holds the first `ceil(len / 2)` elements,
    /// the right half the rest, both in original order.
    pub fn split_halves(&self) -> (List<T>, List<T>) {
        let mut left = self.clone();
        let mut right = List::new();

        if self.len < 2 {
            // Nothing to move over; the right half stays empty
            return (left, right);
        }

        for _ in 0..self.len / 2 {
            match left.pop_back() {
                Some(value) => right.push_front(value),
                None => structure_bug("split_halves"),
            }
        }

        (left, right)
    }

    /// Copies the list and breaks the copy apart into a list of
    /// single-element lists, one per element, in original order. The
    /// original is untouched.
    pub fn explode(&self) -> List<List<T>> {
        let mut singletons = List::new();
        let mut working = self.clone();

        while let Some(value) = working.pop_front() {
            let mut single = List::new();
            single.push_back(value);
            singletons.push_back(single);
        }

        singletons
    }
}

impl<T: Ord + Clone> List<T> {
    /// Returns a sorted copy built by inserting each element in order.
    /// Stable, quadratic time.
    pub fn insertion_sort(&self) -> List<T> {
        let mut sorted = List::new();
        for value in self.iter() {
            sorted.insert_ordered(value.clone());
        }

        sorted
    }

    /// Returns a sorted copy of the list. Stable. Delegates to the
    /// recursive merge sort.
    pub fn merge_sort(&self) -> List<T> {
        self.merge_sort_recursive()
    }

    /// Top-down merge sort: split in half, sort each half, merge. Returns
    /// a sorted copy. Stable, O(n log n).
    pub fn merge_sort_recursive(&self) -> List<T> {
        if self.len < 2 {
            return self.clone();
        }

        let (left, right) = self.split_halves();
        left.merge_sort_recursive().merge(right.merge_sort_recursive())
    }

    /// Bottom-up merge sort: explode into singletons, then repeatedly
    /// merge the two lists at the front of the queue and push the result
    /// to the back, until one sorted list remains. Returns a sorted copy.
    /// O(n log n), no recursion. Unlike the recursive variant this is not
    /// stable: equal elements may not keep their original relative order.
    pub fn merge_sort_iterative(&self) -> List<T> {
        if self.len < 2 {
            return self.clone();
        }

        let mut queue = self.explode();
        while queue.len() > 1 {
            match (queue.pop_front(), queue.pop_front()) {
                (Some(left), Some(right)) => queue.push_back(left.merge(right)),
                _ => structure_bug("merge_sort_iterative"),
            }
        }

        match queue.pop_front() {
            Some(sorted) => sorted,
            None => structure_bug("merge_sort_iterative"),
        }
    }
}
