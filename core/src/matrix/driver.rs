use std::hint::black_box;
use std::mem::size_of;

use super::{Cell, IndexStrategy, WorkOp};
use crate::perf::harness::Throughput;

/// One full `side x side` traversal, row-then-column, applying `W` at the
/// offset chosen by `I`. Returns the final accumulator.
///
/// `side * side` must not exceed `cells.len()`; plans guarantee this, the
/// loop itself only has slice bounds checks.
#[inline(never)]
pub fn traverse<I: IndexStrategy, W: WorkOp>(cells: &mut [Cell], side: usize, acc: Cell) -> Cell {
    let indexer = I::default();
    let worker = W::default();
    let mut acc = black_box(acc);
    for row in 0..side {
        for col in 0..side {
            let offset = indexer.offset(side, row, col);
            worker.apply(cells, &mut acc, offset);
        }
    }
    black_box(&mut *cells);
    black_box(acc)
}

/// Offsets visited by a traversal, in visit order.
pub fn traversal_offsets<I: IndexStrategy>(side: usize) -> impl Iterator<Item = usize> {
    let indexer = I::default();
    (0..side).flat_map(move |row| (0..side).map(move |col| indexer.offset(side, row, col)))
}

pub fn access_throughput(side: usize, iterations: u64) -> Throughput {
    let items = iterations * (side as u64) * (side as u64);
    Throughput::new(items, items * size_of::<Cell>() as u64)
}
