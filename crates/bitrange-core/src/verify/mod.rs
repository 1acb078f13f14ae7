//! Exhaustive self-check of the word-at-a-time range operations.
//!
//! For every valid `(start, length)` and both operations, the store's result
//! is compared against [`reference::NaiveBits`] starting from the same
//! non-uniform background, so disturbed bits outside the range show up too.

pub mod reference;

use thiserror::Error;

use crate::script::OpKind;
use crate::store::{BitRangeStore, Word};
use reference::NaiveBits;

/// Background every case starts from: alternating nibbles, rotated per word
/// so no two adjacent words are equal.
const BACKGROUND: Word = 0xa5a5_a5a5_0f0f_f0f0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("{op} {start}+{length}: word-at-a-time result differs from bit-by-bit reference")]
    Mismatch {
        op: OpKind,
        start: usize,
        length: usize,
    },
    #[error("{op} {start}+{length} past capacity {capacity} was not rejected cleanly")]
    OverrunAccepted {
        op: OpKind,
        start: usize,
        length: usize,
        capacity: usize,
    },
}

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyReport {
    pub capacity: usize,
    pub cases: usize,
}

fn background(word_count: usize) -> Vec<Word> {
    (0..word_count)
        .map(|i| BACKGROUND.rotate_left((i * 7) as u32))
        .collect()
}

/// Checks every valid range of a store of (at least) `capacity_bits` bits.
///
/// Cost grows with the square of the capacity; a few hundred bits is
/// plenty to cover all first/middle/last word combinations.
pub fn verify_exhaustive(capacity_bits: usize) -> Result<VerifyReport, VerifyError> {
    let initial = background(BitRangeStore::new(capacity_bits).word_count());
    let capacity = BitRangeStore::from_words(initial.clone()).capacity();
    let mut cases = 0;

    for op in [OpKind::Set, OpKind::Clear] {
        for start in 0..=capacity {
            for length in 0..=capacity - start {
                check_case(&initial, op, start, length)?;
                cases += 1;
            }
            check_overrun(&initial, op, start, capacity - start + 1)?;
            cases += 1;
        }
    }

    tracing::info!(capacity, cases, "exhaustive range verification passed");
    Ok(VerifyReport { capacity, cases })
}

fn check_case(
    initial: &[Word],
    op: OpKind,
    start: usize,
    length: usize,
) -> Result<(), VerifyError> {
    let mut store = BitRangeStore::from_words(initial.to_vec());
    let mut naive = NaiveBits::from_words(initial);
    let applied = match op {
        OpKind::Set => {
            naive.set_range(start, length);
            store.set_range(start, length)
        }
        OpKind::Clear => {
            naive.clear_range(start, length);
            store.clear_range(start, length)
        }
    };
    if applied.is_err() || store.words() != naive.to_words().as_slice() {
        return Err(VerifyError::Mismatch { op, start, length });
    }
    Ok(())
}

fn check_overrun(
    initial: &[Word],
    op: OpKind,
    start: usize,
    length: usize,
) -> Result<(), VerifyError> {
    let mut store = BitRangeStore::from_words(initial.to_vec());
    let capacity = store.capacity();
    let result = match op {
        OpKind::Set => store.set_range(start, length),
        OpKind::Clear => store.clear_range(start, length),
    };
    if result.is_ok() || store.words() != initial {
        return Err(VerifyError::OverrunAccepted {
            op,
            start,
            length,
            capacity,
        });
    }
    Ok(())
}
