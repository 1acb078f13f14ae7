//! CLI command handlers, one per file.

mod apply;
mod demo;
mod verify;

use anyhow::{bail, Result};
use bitrange_core::store::WORD_BITS;

/// Rejects capacities that the store would round up to whole words.
fn whole_words(capacity: usize) -> Result<usize> {
    if capacity % WORD_BITS != 0 {
        bail!(
            "capacity {} is not a multiple of {} bits (try {})",
            capacity,
            WORD_BITS,
            capacity.next_multiple_of(WORD_BITS)
        );
    }
    Ok(capacity)
}

pub use apply::{run_apply, ApplyArgs};
pub use demo::run_demo;
pub use verify::run_verify;
