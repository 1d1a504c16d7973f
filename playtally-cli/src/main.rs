// playtally-cli/src/main.rs
//
// Entry point for the Playtally command-line tool.
//
// Responsibilities include:
// - Parsing user-provided arguments.
// - Setting up logging.
// - Dispatching to the subcommand implementations.
// - Printing the report or JSON message for the computed aggregate.
// - Managing process exit codes based on success or failure.

use std::process;

use clap::Parser;
use owo_colors::OwoColorize;

use playtally_cli::error::CliResult;
use playtally_cli::output::emit;
use playtally_cli::{Cli, Commands, run_rules, run_scrape, run_sum};
use playtally_core::logging;

fn run(cli: Cli) -> CliResult<()> {
    let result = match &cli.command {
        Commands::Sum(args) => run_sum(args)?,
        Commands::Scrape(args) => run_scrape(args)?,
        Commands::Rules => return run_rules(),
    };
    emit(&result, cli.json)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
