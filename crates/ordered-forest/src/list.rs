//! Doubly-linked sequence over an index-stable arena.
//!
//! Every element occupies one slot addressed by a `u32` position. Positions
//! stay valid until the element is removed; freed slots are recycled for
//! later insertions. The balanced tree in [`crate::avl`] stores these
//! positions instead of owning payloads itself, which is what lets a tree
//! node change place during rebalancing while its element stays put.

use std::fmt;

/// Errors reported by [`OrderedList`] operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// A peek or pop was attempted on an empty list.
    #[error("cannot access element of an empty list")]
    Empty,
    /// A boundary position did not match the recorded head or tail: the link
    /// is not part of this list.
    #[error("link is not part of this list")]
    NotLinked,
}

/// One arena slot: a payload with its neighbour links.
///
/// `data` is an `Option` so a removed slot can surrender its payload by
/// value while staying in place in the arena; `None` marks a recycled slot.
#[derive(Clone, Debug)]
struct DoubleLink<T> {
    data: Option<T>,
    prev: Option<u32>,
    next: Option<u32>,
}

/// A doubly-linked list over an index-stable arena.
///
/// Positions handed out by the insertion operations are stable `u32` handles
/// supporting O(1) splicing, O(1) removal, and O(1) neighbour access. The
/// element count is a counter maintained on every structural change, never
/// recomputed by walking.
pub struct OrderedList<T> {
    arena: Vec<DoubleLink<T>>,
    free: Vec<u32>,
    first: Option<u32>,
    last: Option<u32>,
    length: usize,
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            first: None,
            last: None,
            length: 0,
        }
    }

    /// Number of elements currently linked into the sequence.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Position of the head element.
    pub fn first(&self) -> Option<u32> {
        self.first
    }

    /// Position of the tail element.
    pub fn last(&self) -> Option<u32> {
        self.last
    }

    /// Payload of the slot at `link`.
    ///
    /// Panics when `link` addresses a recycled slot.
    pub fn data(&self, link: u32) -> &T {
        self.arena[link as usize].data.as_ref().expect("live link")
    }

    /// Predecessor position of `link`, `None` at the head.
    pub fn prev(&self, link: u32) -> Option<u32> {
        self.arena[link as usize].prev
    }

    /// Successor position of `link`, `None` at the tail.
    pub fn next(&self, link: u32) -> Option<u32> {
        self.arena[link as usize].next
    }

    fn alloc(&mut self, value: T) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.arena[idx as usize];
                slot.data = Some(value);
                slot.prev = None;
                slot.next = None;
                idx
            }
            None => {
                self.arena.push(DoubleLink {
                    data: Some(value),
                    prev: None,
                    next: None,
                });
                (self.arena.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, link: u32) -> T {
        let data = self.arena[link as usize].data.take().expect("live link");
        self.free.push(link);
        data
    }

    /// Allocate a detached link carrying `value`.
    ///
    /// The link is not part of the sequence until spliced in with
    /// [`insert_link_before`](Self::insert_link_before) or
    /// [`insert_link_after`](Self::insert_link_after).
    pub fn new_link(&mut self, value: T) -> u32 {
        self.alloc(value)
    }

    /// Append `value`, returning its position.
    pub fn push_back(&mut self, value: T) -> u32 {
        let idx = self.alloc(value);
        match self.last {
            Some(last) => {
                self.arena[last as usize].next = Some(idx);
                self.arena[idx as usize].prev = Some(last);
                self.last = Some(idx);
            }
            None => {
                self.first = Some(idx);
                self.last = Some(idx);
            }
        }
        self.length += 1;
        idx
    }

    /// Prepend `value`, returning its position.
    pub fn push_front(&mut self, value: T) -> u32 {
        let idx = self.alloc(value);
        match self.first {
            Some(first) => {
                self.arena[first as usize].prev = Some(idx);
                self.arena[idx as usize].next = Some(first);
                self.first = Some(idx);
            }
            None => {
                self.first = Some(idx);
                self.last = Some(idx);
            }
        }
        self.length += 1;
        idx
    }

    /// Splice the detached link `link` immediately before `at`.
    ///
    /// A boundary `at` (one with no predecessor) must be the recorded head;
    /// anything else fails with [`ListError::NotLinked`].
    pub fn insert_link_before(&mut self, at: u32, link: u32) -> Result<(), ListError> {
        match self.arena[at as usize].prev {
            None => {
                if self.first != Some(at) {
                    return Err(ListError::NotLinked);
                }
                self.arena[link as usize].prev = None;
                self.arena[link as usize].next = Some(at);
                self.arena[at as usize].prev = Some(link);
                self.first = Some(link);
            }
            Some(before) => {
                self.arena[before as usize].next = Some(link);
                self.arena[at as usize].prev = Some(link);
                self.arena[link as usize].prev = Some(before);
                self.arena[link as usize].next = Some(at);
            }
        }
        self.length += 1;
        Ok(())
    }

    /// Splice the detached link `link` immediately after `at`.
    ///
    /// A boundary `at` (one with no successor) must be the recorded tail;
    /// anything else fails with [`ListError::NotLinked`].
    pub fn insert_link_after(&mut self, at: u32, link: u32) -> Result<(), ListError> {
        match self.arena[at as usize].next {
            None => {
                if self.last != Some(at) {
                    return Err(ListError::NotLinked);
                }
                self.arena[link as usize].next = None;
                self.arena[link as usize].prev = Some(at);
                self.arena[at as usize].next = Some(link);
                self.last = Some(link);
            }
            Some(after) => {
                self.arena[after as usize].prev = Some(link);
                self.arena[at as usize].next = Some(link);
                self.arena[link as usize].next = Some(after);
                self.arena[link as usize].prev = Some(at);
            }
        }
        self.length += 1;
        Ok(())
    }

    /// Insert `value` immediately before the element at `at`, returning the
    /// new position.
    pub fn insert_before(&mut self, at: u32, value: T) -> Result<u32, ListError> {
        let link = self.alloc(value);
        match self.insert_link_before(at, link) {
            Ok(()) => Ok(link),
            Err(e) => {
                self.release(link);
                Err(e)
            }
        }
    }

    /// Insert `value` immediately after the element at `at`, returning the
    /// new position.
    pub fn insert_after(&mut self, at: u32, value: T) -> Result<u32, ListError> {
        let link = self.alloc(value);
        match self.insert_link_after(at, link) {
            Ok(()) => Ok(link),
            Err(e) => {
                self.release(link);
                Err(e)
            }
        }
    }

    /// Detach `link`, reconnecting its neighbours, and return its payload.
    ///
    /// The slot is recycled; `link` must not be used afterwards.
    pub fn remove_link(&mut self, link: u32) -> Result<T, ListError> {
        if self.length == 0 {
            return Err(ListError::Empty);
        }
        let prev = self.arena[link as usize].prev;
        let next = self.arena[link as usize].next;
        match (prev, next) {
            (None, None) => {
                if self.first != Some(link) || self.length != 1 {
                    return Err(ListError::NotLinked);
                }
                self.first = None;
                self.last = None;
            }
            (None, Some(next)) => {
                if self.first != Some(link) {
                    return Err(ListError::NotLinked);
                }
                self.first = Some(next);
                self.arena[next as usize].prev = None;
            }
            (Some(prev), None) => {
                if self.last != Some(link) {
                    return Err(ListError::NotLinked);
                }
                self.last = Some(prev);
                self.arena[prev as usize].next = None;
            }
            (Some(prev), Some(next)) => {
                self.arena[prev as usize].next = Some(next);
                self.arena[next as usize].prev = Some(prev);
            }
        }
        self.length -= 1;
        Ok(self.release(link))
    }

    /// Borrow the head payload.
    pub fn get_front(&self) -> Result<&T, ListError> {
        let first = self.first.ok_or(ListError::Empty)?;
        Ok(self.data(first))
    }

    /// Borrow the tail payload.
    pub fn get_back(&self) -> Result<&T, ListError> {
        let last = self.last.ok_or(ListError::Empty)?;
        Ok(self.data(last))
    }

    /// Remove and return the head payload.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let first = self.first.ok_or(ListError::Empty)?;
        self.first = self.arena[first as usize].next;
        match self.first {
            Some(next) => self.arena[next as usize].prev = None,
            None => self.last = None,
        }
        self.length -= 1;
        Ok(self.release(first))
    }

    /// Remove and return the tail payload.
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let last = self.last.ok_or(ListError::Empty)?;
        self.last = self.arena[last as usize].prev;
        match self.last {
            Some(prev) => self.arena[prev as usize].next = None,
            None => self.first = None,
        }
        self.length -= 1;
        Ok(self.release(last))
    }

    /// Linear scan for a payload equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Iterate payloads in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut curr = self.first;
        std::iter::from_fn(move || {
            let idx = curr?;
            curr = self.arena[idx as usize].next;
            Some(self.data(idx))
        })
    }

    /// Collect the full sequence into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Drop every element and recycled slot.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.first = None;
        self.last = None;
        self.length = 0;
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderedList: [")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::{ListError, OrderedList};

    #[test]
    fn splice_rewires_neighbour_links() {
        let mut list = OrderedList::new();
        let a = list.push_back('a');
        let c = list.push_back('c');
        let b = list.new_link('b');
        list.insert_link_before(c, b).unwrap();

        assert_eq!(list.next(a), Some(b));
        assert_eq!(list.prev(c), Some(b));
        assert_eq!(list.prev(b), Some(a));
        assert_eq!(list.next(b), Some(c));
        assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn removed_slots_are_recycled() {
        let mut list = OrderedList::new();
        list.push_back(1);
        let b = list.push_back(2);
        list.push_back(3);

        assert_eq!(list.remove_link(b), Ok(2));
        let reused = list.push_back(4);
        assert_eq!(reused, b);
        assert_eq!(list.to_vec(), vec![1, 3, 4]);
    }

    #[test]
    fn boundary_checks_reject_foreign_links() {
        let mut list = OrderedList::new();
        list.push_back(1);
        list.push_back(2);

        let detached = list.new_link(9);
        assert_eq!(list.remove_link(detached), Err(ListError::NotLinked));
        assert_eq!(list.insert_link_before(detached, detached), Err(ListError::NotLinked));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn empty_list_pops_report_empty() {
        let mut list = OrderedList::<i32>::new();
        assert_eq!(list.pop_back(), Err(ListError::Empty));
        assert_eq!(list.pop_front(), Err(ListError::Empty));
        assert_eq!(list.get_back(), Err(ListError::Empty));
    }
}
