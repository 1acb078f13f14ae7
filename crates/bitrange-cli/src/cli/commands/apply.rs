//! `bitrange apply` – run an operation script on a fresh map.

use anyhow::{bail, Result};
use bitrange_core::render::{render, RenderStyle};
use bitrange_core::script::{run_script, RangeOp, ScriptReport};
use bitrange_core::store::BitRangeStore;

use super::whole_words;

/// Resolved arguments (CLI flags merged with config defaults).
#[derive(Debug, Clone)]
pub struct ApplyArgs {
    pub capacity: usize,
    pub style: RenderStyle,
    pub trace: bool,
    pub strict: bool,
    pub ops: Vec<RangeOp>,
}

/// Runs the script and returns the rendered output plus the report.
/// Kept separate from printing so it can be tested.
pub fn apply_to_string(args: &ApplyArgs) -> Result<(String, ScriptReport)> {
    let mut store = BitRangeStore::new(whole_words(args.capacity)?);
    if args.strict {
        // Capacity is fixed, so every op can be checked up front and nothing
        // runs if any would be rejected.
        for op in &args.ops {
            if let Err(err) = store.check_range(op.start, op.length) {
                bail!("{}: {}", op, err);
            }
        }
    }

    let mut out = String::new();
    let mut first_err = None;
    let report = run_script(&mut store, &args.ops, |op, result, s| {
        if !args.trace || first_err.is_some() {
            return;
        }
        match result {
            Ok(()) => match render(s, args.style) {
                Ok(dump) => {
                    out.push_str(&format!("{}\n", op));
                    out.push_str(&dump);
                }
                Err(err) => first_err = Some(err),
            },
            Err(err) => out.push_str(&format!("{}: {}, skipped\n", op, err)),
        }
    });
    if let Some(err) = first_err {
        return Err(err);
    }
    if !args.trace {
        out.push_str(&render(&store, args.style)?);
    }
    Ok((out, report))
}

pub fn run_apply(args: &ApplyArgs) -> Result<()> {
    let (out, report) = apply_to_string(args)?;
    print!("{}", out);
    for (op, err) in &report.rejected {
        if !args.trace {
            eprintln!("{}: {}, skipped", op, err);
        }
    }
    Ok(())
}
