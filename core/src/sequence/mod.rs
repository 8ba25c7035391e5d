//! Sequence container benchmark: the same workload shapes timed across
//! container kinds and element sizes.

pub mod container;
pub mod element;
pub mod workload;

#[cfg(test)]
mod sequence_test;

pub use container::{Append, Container, OrderedInsert, OrderedMultiSet, Prepend, ScanInsert, SortAll, merge_sort};
pub use element::{Element, LargeRecord};
pub use workload::{
    APPEND_VALUE, append_constant, append_then_sort, naive_sorted_insert, prepend_constant, sequence_throughput,
    sorted_insert,
};
