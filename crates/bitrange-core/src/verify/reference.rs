//! Bit-by-bit reference bitmap used to check the word-at-a-time store.

use crate::store::{Word, WORD_BITS};

/// One `bool` per bit; set/clear walk the range a bit at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaiveBits {
    bits: Vec<bool>,
}

impl NaiveBits {
    pub fn from_words(words: &[Word]) -> Self {
        let bits = (0..words.len() * WORD_BITS)
            .map(|i| words[i / WORD_BITS] >> (i % WORD_BITS) & 1 == 1)
            .collect();
        Self { bits }
    }

    /// Panics if the range runs past the end.
    pub fn set_range(&mut self, start: usize, length: usize) {
        self.bits[start..start + length].fill(true);
    }

    /// Panics if the range runs past the end.
    pub fn clear_range(&mut self, start: usize, length: usize) {
        self.bits[start..start + length].fill(false);
    }

    pub fn to_words(&self) -> Vec<Word> {
        self.bits
            .chunks(WORD_BITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .rev()
                    .fold(0, |word, &bit| word << 1 | Word::from(bit))
            })
            .collect()
    }
}
