//! CLI for the bitrange bitmap tool.

mod commands;

use anyhow::Result;
use bitrange_core::config;
use bitrange_core::render::RenderStyle;
use bitrange_core::script::RangeOp;
use clap::{Parser, Subcommand};

use commands::{run_apply, run_demo, run_verify, ApplyArgs};

/// Top-level CLI for bitrange.
#[derive(Debug, Parser)]
#[command(name = "bitrange")]
#[command(about = "bitrange: word-at-a-time bit range set/clear", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Replay the built-in walk-through on a 512-bit map.
    Demo {
        /// Output style: words, bytes or json (default from config).
        #[arg(long, value_name = "STYLE")]
        format: Option<RenderStyle>,
    },

    /// Apply set/clear operations to a fresh map and print it.
    Apply {
        /// Capacity in bits, a multiple of 64 (default from config).
        #[arg(long, value_name = "BITS")]
        capacity: Option<usize>,
        /// Output style: words, bytes or json (default from config).
        #[arg(long, value_name = "STYLE")]
        format: Option<RenderStyle>,
        /// Print the map after every operation.
        #[arg(long)]
        trace: bool,
        /// Fail on the first rejected operation instead of skipping it.
        #[arg(long)]
        strict: bool,
        /// Operations as KIND:START:LEN, e.g. set:311:68 clear:121:18.
        #[arg(required = true, value_name = "OP")]
        ops: Vec<RangeOp>,
    },

    /// Check every range of a map against a bit-by-bit reference.
    Verify {
        /// Capacity in bits, a multiple of 64 (default from config).
        #[arg(long, value_name = "BITS")]
        capacity: Option<usize>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Demo { format } => run_demo(format.unwrap_or(cfg.render))?,
            CliCommand::Apply {
                capacity,
                format,
                trace,
                strict,
                ops,
            } => run_apply(&ApplyArgs {
                capacity: capacity.unwrap_or(cfg.capacity_bits),
                style: format.unwrap_or(cfg.render),
                trace: trace || cfg.trace,
                strict,
                ops,
            })?,
            CliCommand::Verify { capacity } => {
                run_verify(capacity.unwrap_or(cfg.verify_capacity))?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
