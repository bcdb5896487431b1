//! The ordered-set facade owning the balanced tree and its companion list.

use std::fmt;

use crate::avl::{self, AvlNode};
use crate::list::OrderedList;
use crate::print::to_dot;

fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// An ordered set: a height-balanced search tree over comparator order whose
/// elements are threaded, in sorted order, through an [`OrderedList`].
///
/// The tree answers `insert` / `remove` / `contains` in O(log n); the list
/// keeps [`iter`](Self::iter) and [`to_vec`](Self::to_vec) O(n) with no tree
/// walk and gives O(1) access to the smallest and largest element. The
/// element count is always read from the list, never tracked on the tree
/// side.
pub struct OrderedSet<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    nodes: Vec<AvlNode>,
    free: Vec<u32>,
    root: Option<u32>,
    list: OrderedList<T>,
    comparator: C,
}

impl<T> OrderedSet<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for OrderedSet<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> OrderedSet<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    /// Build an empty set ordered by `comparator` (negative / zero /
    /// positive convention; see [`Comparator`](crate::types::Comparator)).
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            list: OrderedList::new(),
            comparator,
        }
    }

    /// Insert `value`. Returns `false` when an equal element was already
    /// present, in which case the set is left untouched and `value` is
    /// dropped.
    pub fn insert(&mut self, value: T) -> bool {
        match self.root {
            None => {
                let link = self.list.push_back(value);
                self.root = Some(avl::alloc(&mut self.nodes, &mut self.free, link));
                true
            }
            Some(root) => {
                let (new_root, inserted) = avl::insert(
                    &mut self.nodes,
                    &mut self.free,
                    &mut self.list,
                    root,
                    value,
                    &self.comparator,
                );
                self.root = Some(new_root);
                inserted
            }
        }
    }

    /// Remove the element equal to `key`. Returns `false` when no such
    /// element exists, in which case the set is left untouched.
    pub fn remove(&mut self, key: &T) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        if self.len() == 1 {
            if (self.comparator)(key, self.list.data(self.nodes[root as usize].pos)) != 0 {
                return false;
            }
            self.list.pop_back().expect("one-element list");
            avl::release(&mut self.nodes, &mut self.free, root);
            self.root = None;
            true
        } else {
            let (new_root, removed) = avl::remove(
                &mut self.nodes,
                &mut self.free,
                &mut self.list,
                root,
                key,
                &self.comparator,
            );
            self.root = new_root;
            removed
        }
    }

    /// Whether an element equal to `key` is present.
    pub fn contains(&self, key: &T) -> bool {
        avl::find(&self.nodes, &self.list, self.root, key, &self.comparator).is_some()
    }

    /// Number of elements, read from the list.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Smallest element under the comparator.
    pub fn first(&self) -> Option<&T> {
        self.list.first().map(|i| self.list.data(i))
    }

    /// Largest element under the comparator.
    pub fn last(&self) -> Option<&T> {
        self.list.last().map(|i| self.list.data(i))
    }

    /// Iterate elements in ascending comparator order; O(n) over the list,
    /// no tree walk.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.list.iter()
    }

    /// Collect the elements in ascending comparator order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.list.clear();
    }

    /// Validate every structural invariant of the tree, the list, and their
    /// synchronization. Test support; cheap enough to call after each
    /// mutation in a debugging session.
    pub fn assert_valid(&self) -> Result<(), String> {
        avl::assert_avl(&self.nodes, &self.list, self.root, &self.comparator)
    }

    /// Graphviz rendering of the tree for diagnostics.
    pub fn to_dot(&self) -> String
    where
        T: fmt::Display,
    {
        to_dot(&self.nodes, &self.list, self.root)
    }
}
