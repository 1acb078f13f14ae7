//! Fixed-capacity bitmap with word-at-a-time range set/clear.
//!
//! Bit `i` lives in bit `i % WORD_BITS` of word `i / WORD_BITS` (LSB first).
//! Range requests are half-open, `[start, start + length)`, and are bounds
//! checked before any word is written, so a rejected request leaves the
//! store untouched.

pub mod mask;

use std::ops::Range;

use crate::error::RangeError;
use mask::{bit_word, first_word_mask, last_word_mask};

/// Storage granule of the bitmap.
pub type Word = u64;

/// Number of bits in one [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Packed bitmap of fixed capacity supporting bulk range set/clear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitRangeStore {
    words: Vec<Word>,
}

impl BitRangeStore {
    /// New store with all bits clear, able to address at least `capacity_bits` bits.
    ///
    /// Capacity is rounded up to a whole number of words; [`capacity`](Self::capacity)
    /// reports the rounded value.
    pub fn new(capacity_bits: usize) -> Self {
        Self::with_words(capacity_bits.div_ceil(WORD_BITS))
    }

    /// New store of `word_count` clear words.
    pub fn with_words(word_count: usize) -> Self {
        Self {
            words: vec![0; word_count],
        }
    }

    /// Store taking ownership of existing words.
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Number of addressable bits (`word_count * WORD_BITS`).
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Snapshot of the backing words, for printing or comparison.
    pub fn render(&self) -> Vec<Word> {
        self.words.clone()
    }

    /// Whether bit `index` is set; `None` past the end of the store.
    pub fn test(&self, index: usize) -> Option<bool> {
        self.words
            .get(bit_word(index))
            .map(|word| word & (1 << (index % WORD_BITS)) != 0)
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Indices of set bits in ascending order.
    pub fn iter_ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word_index: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Validates `[start, start + length)` against the capacity.
    pub fn check_range(&self, start: usize, length: usize) -> Result<Range<usize>, RangeError> {
        let capacity = self.capacity();
        match start.checked_add(length) {
            Some(end) if end <= capacity => Ok(start..end),
            _ => Err(RangeError::OutOfBounds {
                start,
                length,
                capacity,
            }),
        }
    }

    /// Sets bits `[start, start + length)` to 1.
    pub fn set_range(&mut self, start: usize, length: usize) -> Result<(), RangeError> {
        self.checked_apply(start, length, |word, mask| *word |= mask)?;
        tracing::trace!(start, length, "bit range set");
        Ok(())
    }

    /// Clears bits `[start, start + length)` to 0.
    pub fn clear_range(&mut self, start: usize, length: usize) -> Result<(), RangeError> {
        self.checked_apply(start, length, |word, mask| *word &= !mask)?;
        tracing::trace!(start, length, "bit range cleared");
        Ok(())
    }

    fn checked_apply(
        &mut self,
        start: usize,
        length: usize,
        op: impl Fn(&mut Word, Word),
    ) -> Result<(), RangeError> {
        self.check_range(start, length)?;
        self.apply_masked(start, length, op);
        Ok(())
    }

    /// Applies `op` to every word the range touches with a mask of the bits
    /// inside the range. Caller has validated the range.
    fn apply_masked(&mut self, start: usize, length: usize, op: impl Fn(&mut Word, Word)) {
        let end = start + length;
        let mut index = bit_word(start);
        let mut remaining = length;
        let mut bits_in_word = WORD_BITS - start % WORD_BITS;
        let mut mask = first_word_mask(start);

        while remaining >= bits_in_word {
            op(&mut self.words[index], mask);
            remaining -= bits_in_word;
            bits_in_word = WORD_BITS;
            mask = Word::MAX;
            index += 1;
        }
        if remaining > 0 {
            mask &= last_word_mask(end);
            op(&mut self.words[index], mask);
        }
    }
}

/// Iterator over set-bit indices of a [`BitRangeStore`].
pub struct Ones<'a> {
    words: &'a [Word],
    word_index: usize,
    current_word: Word,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word == 0 {
                self.word_index += 1;
                self.current_word = *self.words.get(self.word_index)?;
                continue;
            }

            let bit = self.current_word.trailing_zeros() as usize;
            self.current_word &= self.current_word - 1;
            return Some(self.word_index * WORD_BITS + bit);
        }
    }
}

#[cfg(test)]
mod tests;
