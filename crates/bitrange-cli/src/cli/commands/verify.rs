//! `bitrange verify` – exhaustive check against the bit-by-bit reference.

use anyhow::{Context, Result};
use bitrange_core::verify::verify_exhaustive;

use super::whole_words;

pub fn run_verify(capacity: usize) -> Result<()> {
    let report = verify_exhaustive(whole_words(capacity)?)
        .with_context(|| format!("verify {} bits", capacity))?;
    println!(
        "ok: {} cases over {} bits match the reference",
        report.cases, report.capacity
    );
    Ok(())
}
