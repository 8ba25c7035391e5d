//! Random input data shared by every benchmark driver.
//!
//! The buffer is generated once, before any timed region, and handed to the
//! drivers explicitly. Values are uniform over the whole `i32` range so that
//! sort keys and matrix cells carry no exploitable structure.

use anyhow::{Result, bail};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Word type stored in the buffer.
pub type Word = i32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomBuffer {
    words: Box<[Word]>,
    seed: Option<u64>,
}

impl RandomBuffer {
    /// Fill `len` words from a uniform distribution. Without a seed the
    /// generator is drawn from OS entropy, so contents differ across runs.
    pub fn generate(len: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let dist = Uniform::new_inclusive(Word::MIN, Word::MAX);
        let words: Box<[Word]> = dist.sample_iter(&mut rng).take(len).collect();
        debug!(len, bytes = len * std::mem::size_of::<Word>(), ?seed, "generated random buffer");
        Self { words, seed }
    }

    pub fn from_words(words: impl Into<Box<[Word]>>) -> Self {
        Self {
            words: words.into(),
            seed: None,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// First `count` words, or an error when the buffer is too short.
    pub fn prefix(&self, count: usize) -> Result<&[Word]> {
        match self.words.get(..count) {
            Some(words) => Ok(words),
            None => bail!(
                "requested {} words but the random buffer only holds {}",
                count,
                self.words.len()
            ),
        }
    }

    pub fn checksum(&self) -> u64 {
        checksum(&self.words)
    }

    pub fn into_words(self) -> Box<[Word]> {
        self.words
    }
}

/// Order-sensitive FNV-1a style digest over a word slice.
pub fn checksum(words: &[Word]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    words.iter().fold(OFFSET, |hash, &word| {
        (hash ^ u64::from(word as u32)).wrapping_mul(PRIME)
    })
}
