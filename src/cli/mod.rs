//! Command line interface for the asset bundler.
//!
//! This module provides the CLI entry point: argument parsing, settings
//! construction and bundle execution.

mod args;

pub use args::Args;

use crate::bundler::Bundler;
use crate::error::Result;

/// Main CLI entry point
pub fn run(args: Args) -> Result<i32> {
    let settings = args.to_settings()?;
    let summary = Bundler::new(settings).bundle()?;

    log::debug!(
        "Bundle {} holds {} files ({} bytes)",
        summary.output_path.display(),
        summary.records.len(),
        summary.total_bytes
    );

    Ok(0)
}

/// Parse arguments without executing
pub fn parse_args() -> Args {
    Args::parse_args()
}
