//! Implementation of the 'rules' subcommand.

use playtally_core::RuleSet;

use crate::error::CliResult;

/// Prints the built-in rule set so it can be saved and edited.
pub fn run_rules() -> CliResult<()> {
    println!("{}", RuleSet::default().to_json_pretty()?);
    Ok(())
}
