use crate::list::{List, Node};

/// Hint appended to every structural-corruption panic
pub(crate) const BUG_HINT: &str =
    "probable causes: stale head or tail pointer, an un-updated next or prev link, or a wrong cached len";

/// Reports a detected structural invariant violation and aborts the
/// operation. This is the bug-class channel: it fires only on defects in the
/// container itself, never on ordinary misuse, and is not meant to be caught
/// as routine control flow.
#[cold]
#[inline(never)]
pub(crate) fn structure_bug(op: &str) -> ! {
    panic!("{op}: internal list invariant violated; {BUG_HINT}");
}

impl<T> List<T> {
    /// Recounts the nodes by full forward traversal and panics if the count
    /// disagrees with the cached length. For testing and debugging.
    pub fn assert_correct_size(&self) {
        let mut count = 0;
        let mut cur = self.head;
        while !cur.is_null() {
            count += 1;
            cur = unsafe { (*cur).next };
        }

        if count != self.len {
            structure_bug("assert_correct_size");
        }
    }

    /// Checks the reverse-direction links: the sequence of node addresses
    /// reached from the head via `next` must be exactly the sequence reached
    /// from the tail via `prev`. Panics on any mismatch. For testing and
    /// debugging.
    pub fn assert_prev_links(&self) {
        // Both address sequences read head to tail; the reverse one is
        // built by pushing to the front while walking backwards.
        let mut forward: List<*const Node<T>> = List::new();
        let mut reverse: List<*const Node<T>> = List::new();

        let mut cur = self.head;
        while !cur.is_null() {
            forward.push_back(cur as *const Node<T>);
            cur = unsafe { (*cur).next };
        }

        let mut cur = self.tail;
        while !cur.is_null() {
            reverse.push_front(cur as *const Node<T>);
            cur = unsafe { (*cur).prev };
        }

        if forward != reverse {
            structure_bug("assert_prev_links");
        }
    }
}
