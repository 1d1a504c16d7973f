// playtally-cli/src/lib.rs
//
// Library portion of the Playtally CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, ScrapeArgs, SumArgs};
pub use commands::rules::run_rules;
pub use commands::scrape::run_scrape;
pub use commands::sum::run_sum;
