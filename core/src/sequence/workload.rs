//! Timed workload shapes. Each driver builds a fresh container, performs the
//! workload and hands the container back so the caller decides when it is
//! dropped.

use super::container::{Append, OrderedInsert, Prepend, ScanInsert, SortAll};
use super::element::Element;
use crate::buffer::Word;
use crate::perf::harness::Throughput;

/// Constant used by the append and prepend workloads.
pub const APPEND_VALUE: Word = 11235;

pub fn append_constant<C, T>(count: usize) -> C
where
    C: Append<T>,
    T: Element,
{
    let value = T::from_word(APPEND_VALUE);
    let mut container = C::default();
    for _ in 0..count {
        container.append_value(value);
    }
    container
}

pub fn prepend_constant<C, T>(count: usize) -> C
where
    C: Prepend<T>,
    T: Element,
{
    let value = T::from_word(APPEND_VALUE);
    let mut container = C::default();
    for _ in 0..count {
        container.prepend_value(value);
    }
    container
}

/// Linear-scan sorted insertion of every input word.
pub fn naive_sorted_insert<C, T>(input: &[Word]) -> C
where
    C: ScanInsert<T>,
    T: Element,
{
    let mut container = C::default();
    for &word in input {
        container.scan_insert(T::from_word(word));
    }
    container
}

/// Append everything unsorted, then sort once with the container's own sort.
pub fn append_then_sort<C, T>(input: &[Word]) -> C
where
    C: SortAll<T>,
    T: Element,
{
    let mut container = C::default();
    for &word in input {
        container.append_value(T::from_word(word));
    }
    container.sort_all();
    container
}

/// Binary-search (or natively ordered) insertion of every input word.
pub fn sorted_insert<C, T>(input: &[Word]) -> C
where
    C: OrderedInsert<T>,
    T: Element,
{
    let mut container = C::default();
    for &word in input {
        container.ordered_insert(T::from_word(word));
    }
    container
}

pub fn sequence_throughput<T: Element>(count: usize, iterations: u64) -> Throughput {
    let items = iterations * count as u64;
    Throughput::new(items, items * T::width() as u64)
}
