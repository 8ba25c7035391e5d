//! Index strategies map a `(row, col)` pair of a `side x side` matrix to a
//! linear offset into the row-major buffer.

pub trait IndexStrategy: Copy + Default + 'static {
    const NAME: &'static str;

    fn offset(&self, side: usize, row: usize, col: usize) -> usize;
}

/// Row-major: consecutive columns are adjacent in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Friendly;

/// Column-major over row-major storage: every column step skips `side` cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unfriendly;

impl IndexStrategy for Friendly {
    const NAME: &'static str = "friendly";

    #[inline(always)]
    fn offset(&self, side: usize, row: usize, col: usize) -> usize {
        row * side + col
    }
}

impl IndexStrategy for Unfriendly {
    const NAME: &'static str = "unfriendly";

    #[inline(always)]
    fn offset(&self, side: usize, row: usize, col: usize) -> usize {
        col * side + row
    }
}
