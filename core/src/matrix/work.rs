use std::hint::black_box;

use super::Cell;

/// Action performed at every visited offset. `acc` starts at the configured
/// write value and lives for the whole traversal.
pub trait WorkOp: Copy + Default + 'static {
    const NAME: &'static str;
    /// Whether the operation stores into the buffer.
    const MUTATES: bool;

    fn apply(&self, cells: &mut [Cell], acc: &mut Cell, offset: usize);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Read;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReadDependent;

#[derive(Debug, Clone, Copy, Default)]
pub struct Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteDependent;

impl WorkOp for Read {
    const NAME: &'static str = "read";
    const MUTATES: bool = false;

    #[inline(always)]
    fn apply(&self, cells: &mut [Cell], _acc: &mut Cell, offset: usize) {
        // Without the barrier the load is dead and the loop folds away.
        black_box(cells[offset]);
    }
}

impl WorkOp for ReadDependent {
    const NAME: &'static str = "read_dependent";
    const MUTATES: bool = false;

    #[inline(always)]
    fn apply(&self, cells: &mut [Cell], acc: &mut Cell, offset: usize) {
        *acc ^= cells[offset];
    }
}

impl WorkOp for Write {
    const NAME: &'static str = "write";
    const MUTATES: bool = true;

    #[inline(always)]
    fn apply(&self, cells: &mut [Cell], acc: &mut Cell, offset: usize) {
        cells[offset] = *acc;
    }
}

impl WorkOp for WriteDependent {
    const NAME: &'static str = "write_dependent";
    const MUTATES: bool = true;

    #[inline(always)]
    fn apply(&self, cells: &mut [Cell], acc: &mut Cell, offset: usize) {
        cells[offset] ^= *acc;
    }
}
