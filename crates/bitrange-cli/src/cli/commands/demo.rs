//! `bitrange demo` – replay the built-in walk-through.

use anyhow::Result;
use bitrange_core::error::RangeError;
use bitrange_core::render::{render, RenderStyle};
use bitrange_core::script::{demo_script, run_script, DEMO_CAPACITY};
use bitrange_core::store::BitRangeStore;

pub fn run_demo(style: RenderStyle) -> Result<()> {
    let mut store = BitRangeStore::new(DEMO_CAPACITY);
    let mut render_err = None;
    let report = run_script(&mut store, &demo_script(), |op, result, s| match result {
        Ok(()) => match render(s, style) {
            Ok(out) => {
                println!("{}", op);
                print!("{}", out);
            }
            Err(err) => {
                render_err.get_or_insert(err);
            }
        },
        Err(RangeError::OutOfBounds {
            start,
            length,
            capacity,
        }) => eprintln!("{} + {} > {}, skipped", start, length, capacity),
    });
    if let Some(err) = render_err {
        return Err(err);
    }
    tracing::info!(
        applied = report.applied,
        rejected = report.rejected.len(),
        "demo finished"
    );
    Ok(())
}
