//! Word index and mask helpers for range operations.

use super::{Word, WORD_BITS};

/// Index of the word holding bit `nr`.
#[inline]
pub const fn bit_word(nr: usize) -> usize {
    nr / WORD_BITS
}

/// Mask covering bits `[start % WORD_BITS, WORD_BITS)` of a word.
#[inline]
pub const fn first_word_mask(start: usize) -> Word {
    Word::MAX << (start % WORD_BITS)
}

/// Mask covering bits `[0, nbits % WORD_BITS)` of a word.
///
/// A multiple of `WORD_BITS` (including 0) gives the full mask: the range
/// ends on a word boundary, so the last word is covered entirely.
#[inline]
pub const fn last_word_mask(nbits: usize) -> Word {
    Word::MAX >> (nbits.wrapping_neg() & (WORD_BITS - 1))
}
