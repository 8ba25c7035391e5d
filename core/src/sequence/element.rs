use std::cmp::Ordering;
use std::fmt::Debug;
use std::mem::size_of;

use crate::buffer::Word;

pub trait Element: Copy + Ord + Debug + 'static {
    const NAME: &'static str;

    fn from_word(word: Word) -> Self;

    fn key(&self) -> Word;

    /// Bytes moved per element; used for bytes/sec reporting.
    fn width() -> usize {
        size_of::<Self>()
    }
}

impl Element for Word {
    const NAME: &'static str = "small";

    #[inline]
    fn from_word(word: Word) -> Self {
        word
    }

    #[inline]
    fn key(&self) -> Word {
        *self
    }
}

/// Sixteen words compared by the first one only, so moves cost far more than
/// comparisons.
#[derive(Debug, Clone, Copy)]
pub struct LargeRecord {
    words: [Word; LargeRecord::WORDS],
}

impl LargeRecord {
    pub const WORDS: usize = 16;

    pub fn new(key: Word) -> Self {
        let mut words = [0; Self::WORDS];
        words[0] = key;
        Self { words }
    }

    pub fn words(&self) -> &[Word; Self::WORDS] {
        &self.words
    }
}

impl PartialEq for LargeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.words[0] == other.words[0]
    }
}

impl Eq for LargeRecord {}

impl PartialOrd for LargeRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LargeRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.words[0].cmp(&other.words[0])
    }
}

impl From<Word> for LargeRecord {
    fn from(key: Word) -> Self {
        Self::new(key)
    }
}

impl Element for LargeRecord {
    const NAME: &'static str = "large";

    #[inline]
    fn from_word(word: Word) -> Self {
        Self::new(word)
    }

    #[inline]
    fn key(&self) -> Word {
        self.words[0]
    }
}
