//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Sums labels given one per line.
pub mod sum;

/// Extracts labels from a saved page and sums them.
pub mod scrape;

/// Prints the built-in rule set.
pub mod rules;
