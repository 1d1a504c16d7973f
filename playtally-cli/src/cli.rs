// playtally-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Playtally: playlist duration calculator",
    long_about = "Sums the duration labels of a video playlist, either from a list of \
                  labels or from a saved playlist page, using the playtally-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print the updateDuration message as JSON instead of a report.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sums duration labels given one per line
    Sum(SumArgs),
    /// Extracts and sums the duration labels of a saved playlist page
    Scrape(ScrapeArgs),
    /// Prints the built-in extraction rules as JSON
    Rules,
}

#[derive(Parser, Debug)]
pub struct SumArgs {
    /// File with one label per line (reads stdin when omitted)
    #[arg(value_name = "LABELS_FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ScrapeArgs {
    /// Saved HTML of the playlist or watch page
    #[arg(required = true, value_name = "HTML_FILE")]
    pub page: PathBuf,

    /// Optional: URL the page was saved from; non-playlist URLs are refused
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Optional: JSON rules file replacing the built-in extraction rules.
    /// Can also be set via the PLAYTALLY_RULES environment variable.
    #[arg(long, value_name = "RULES_FILE", env = "PLAYTALLY_RULES")]
    pub rules: Option<PathBuf>,

    /// List the raw labels found on the page before the report
    #[arg(long, default_value_t = false)]
    pub show_labels: bool,
}
