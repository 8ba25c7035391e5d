//! Matrix access benchmark: a square region of a row-major buffer is walked
//! with either a row-major or a column-major index strategy while one of four
//! per-element operations is applied.
//!
//! Recall, for a matrix:
//!   a11, a12, a13
//!   a21, a22, a23
//!   a31, a32, a33
//!
//! the row-major traversal is a11, a12, a13, a21, ... and the column-major
//! traversal is a11, a21, a31, a12, .... When traversal order matches the
//! storage order the walk is cache friendly; otherwise each step jumps a full
//! row ahead.

use anyhow::{Result, ensure};

use crate::buffer::{RandomBuffer, Word};

pub mod driver;
pub mod index;
pub mod work;


pub use driver::{access_throughput, traversal_offsets, traverse};
pub use index::{Friendly, IndexStrategy, Unfriendly};
pub use work::{Read, ReadDependent, WorkOp, Write, WriteDependent};

/// Cell type of the matrix buffer.
pub type Cell = Word;

/// Owns the cells of the largest matrix a plan may traverse. Smaller sides
/// reuse the leading `side * side` cells.
#[derive(Debug)]
pub struct MatrixBuffer {
    cells: Box<[Cell]>,
    max_side: usize,
}

impl MatrixBuffer {
    pub fn from_random(buffer: RandomBuffer, max_side: usize) -> Result<Self> {
        let required = max_side
            .checked_mul(max_side)
            .ok_or_else(|| anyhow::anyhow!("matrix side {} overflows the address space", max_side))?;
        ensure!(
            buffer.len() >= required,
            "matrix side {} needs {} cells but the random buffer holds {}",
            max_side,
            required,
            buffer.len()
        );
        Ok(Self {
            cells: buffer.into_words(),
            max_side,
        })
    }

    /// Generates a fresh buffer sized for `max_side`.
    pub fn generate(max_side: usize, seed: Option<u64>) -> Result<Self> {
        let len = max_side
            .checked_mul(max_side)
            .ok_or_else(|| anyhow::anyhow!("matrix side {} overflows the address space", max_side))?;
        Self::from_random(RandomBuffer::generate(len, seed), max_side)
    }

    pub fn max_side(&self) -> usize {
        self.max_side
    }

    pub fn fits(&self, side: usize) -> bool {
        side <= self.max_side
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
