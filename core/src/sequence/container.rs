//! Capability traits for the containers under test.
//!
//! A container implements only what its workloads can meaningfully exercise:
//! the linked list has no binary-search insertion and the multi-set only
//! supports ordered insertion. Workloads are generic over these traits, so a
//! combination a container cannot serve fails to type-check instead of
//! failing at runtime.

use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::mem;

pub trait Container<T>: Default {
    const NAME: &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements in iteration order.
    fn to_vec(&self) -> Vec<T>;
}

pub trait Append<T>: Container<T> {
    fn append_value(&mut self, value: T);
}

pub trait Prepend<T>: Container<T> {
    fn prepend_value(&mut self, value: T);
}

/// Insert before the first element not less than `value`, found by walking
/// from the front.
pub trait ScanInsert<T: Ord>: Container<T> {
    fn scan_insert(&mut self, value: T);
}

pub trait SortAll<T: Ord>: Append<T> {
    fn sort_all(&mut self);
}

/// Insert keeping the container sorted, locating the position in
/// logarithmic comparisons.
pub trait OrderedInsert<T: Ord>: Container<T> {
    fn ordered_insert(&mut self, value: T);
}

impl<T: Clone> Container<T> for Vec<T> {
    const NAME: &'static str = "vec";

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn to_vec(&self) -> Vec<T> {
        self.clone()
    }
}

impl<T: Clone> Append<T> for Vec<T> {
    #[inline]
    fn append_value(&mut self, value: T) {
        self.push(value);
    }
}

impl<T: Clone> Prepend<T> for Vec<T> {
    #[inline]
    fn prepend_value(&mut self, value: T) {
        self.insert(0, value);
    }
}

impl<T: Clone + Ord> ScanInsert<T> for Vec<T> {
    fn scan_insert(&mut self, value: T) {
        let at = self.iter().position(|e| *e >= value).unwrap_or(self.len());
        self.insert(at, value);
    }
}

impl<T: Clone + Ord> SortAll<T> for Vec<T> {
    fn sort_all(&mut self) {
        self.sort_unstable();
    }
}

impl<T: Clone + Ord> OrderedInsert<T> for Vec<T> {
    fn ordered_insert(&mut self, value: T) {
        let at = self.partition_point(|e| *e < value);
        self.insert(at, value);
    }
}

impl<T: Clone> Container<T> for VecDeque<T> {
    const NAME: &'static str = "deque";

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> Append<T> for VecDeque<T> {
    #[inline]
    fn append_value(&mut self, value: T) {
        self.push_back(value);
    }
}

impl<T: Clone> Prepend<T> for VecDeque<T> {
    #[inline]
    fn prepend_value(&mut self, value: T) {
        self.push_front(value);
    }
}

impl<T: Clone + Ord> ScanInsert<T> for VecDeque<T> {
    fn scan_insert(&mut self, value: T) {
        let at = self.iter().position(|e| *e >= value).unwrap_or(self.len());
        self.insert(at, value);
    }
}

impl<T: Clone + Ord> SortAll<T> for VecDeque<T> {
    fn sort_all(&mut self) {
        self.make_contiguous().sort_unstable();
    }
}

impl<T: Clone + Ord> OrderedInsert<T> for VecDeque<T> {
    fn ordered_insert(&mut self, value: T) {
        let at = self.partition_point(|e| *e < value);
        self.insert(at, value);
    }
}

impl<T: Clone> Container<T> for LinkedList<T> {
    const NAME: &'static str = "list";

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> Append<T> for LinkedList<T> {
    #[inline]
    fn append_value(&mut self, value: T) {
        self.push_back(value);
    }
}

impl<T: Clone> Prepend<T> for LinkedList<T> {
    #[inline]
    fn prepend_value(&mut self, value: T) {
        self.push_front(value);
    }
}

impl<T: Clone + Ord> ScanInsert<T> for LinkedList<T> {
    fn scan_insert(&mut self, value: T) {
        let at = self.iter().position(|e| *e >= value).unwrap_or(self.len());
        // No stable cursor API: detach the tail, push, relink.
        let mut tail = self.split_off(at);
        self.push_back(value);
        self.append(&mut tail);
    }
}

impl<T: Clone + Ord> SortAll<T> for LinkedList<T> {
    fn sort_all(&mut self) {
        merge_sort(self);
    }
}

/// Stable top-down merge sort that relinks the list's own nodes. No element
/// is copied and no node is reallocated.
pub fn merge_sort<T: Ord>(list: &mut LinkedList<T>) {
    if list.len() < 2 {
        return;
    }
    let mut right = list.split_off(list.len() / 2);
    merge_sort(list);
    merge_sort(&mut right);
    let left = mem::take(list);
    *list = merge(left, right);
}

fn merge<T: Ord>(mut left: LinkedList<T>, mut right: LinkedList<T>) -> LinkedList<T> {
    let mut merged = LinkedList::new();
    loop {
        // Ties go to the left run to keep the sort stable.
        let take_right = match (left.front(), right.front()) {
            (Some(l), Some(r)) => r < l,
            _ => break,
        };
        let source = if take_right { &mut right } else { &mut left };
        let rest = source.split_off(1);
        let mut head = mem::replace(source, rest);
        merged.append(&mut head);
    }
    merged.append(&mut left);
    merged.append(&mut right);
    merged
}

/// Balanced-tree multi-set. Equal elements are kept in insertion order,
/// disambiguated by a monotonically increasing sequence number.
#[derive(Debug, Clone)]
pub struct OrderedMultiSet<T> {
    entries: BTreeSet<(T, u64)>,
    next_seq: u64,
}

impl<T> Default for OrderedMultiSet<T> {
    fn default() -> Self {
        Self {
            entries: BTreeSet::new(),
            next_seq: 0,
        }
    }
}

impl<T: Ord> OrderedMultiSet<T> {
    pub fn insert(&mut self, value: T) {
        self.entries.insert((value, self.next_seq));
        self.next_seq += 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(value, _)| value)
    }
}

impl<T: Clone + Ord> Container<T> for OrderedMultiSet<T> {
    const NAME: &'static str = "multiset";

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone + Ord> OrderedInsert<T> for OrderedMultiSet<T> {
    #[inline]
    fn ordered_insert(&mut self, value: T) {
        self.insert(value);
    }
}
