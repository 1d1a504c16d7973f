//! Implementation of the 'sum' subcommand.

use log::debug;
use playtally_core::{AggregateResult, aggregate};

use crate::cli::SumArgs;
use crate::error::{CliResult, InputKind};

/// Reads labels (one per line) from the input file or stdin and sums them.
pub fn run_sum(args: &SumArgs) -> CliResult<AggregateResult> {
    let text = InputKind::LabelList.read(args.input.as_deref())?;

    let labels: Vec<&str> = text.lines().collect();
    debug!("Read {} label line(s)", labels.len());

    Ok(aggregate(labels))
}
