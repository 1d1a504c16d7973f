//! Terminal output for aggregate reports.
//!
//! Colors are only used when stdout supports them, so piped output stays
//! plain text.

use std::fmt::Display;

use owo_colors::{OwoColorize, Style};
use playtally_core::{AggregateResult, Message, NO_DURATIONS_FOUND};
use supports_color::Stream;

use crate::error::CliResult;

fn paint(text: &str, style: Style) -> String {
    if supports_color::on_cached(Stream::Stdout).is_some() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Print a heading with clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(40);
    println!("{}", paint(&line, Style::new().bright_blue()));
    println!("{}", paint(&format!(" {} ", text), Style::new().bold().bright_white()));
    println!("{}", paint(&line, Style::new().bright_blue()));
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", paint(label, Style::new().bright_cyan()), value);
}

pub fn print_warning(message: &str) {
    println!("{}", paint(message, Style::new().yellow().bold()));
}

/// Print the raw labels a scrape produced
pub fn print_labels(labels: &[String]) {
    for label in labels {
        println!("  {}", paint(label.trim(), Style::new().dimmed()));
    }
}

/// Print a human-readable report for an aggregate
pub fn print_report(result: &AggregateResult) {
    print_heading("Playlist Duration");

    if result.is_empty() {
        print_warning(NO_DURATIONS_FOUND);
        return;
    }

    print_info("Duration", &result.formatted_duration);
    print_info("Videos", result.item_count);
    print_info("Total minutes", result.total_minutes());
    if let Some(average) = result.average_seconds_per_item() {
        print_info("Average", format!("~{:.1} min/video", average / 60.0));
    }
}

/// Print the updateDuration message as a single JSON line
pub fn print_message(result: &AggregateResult) -> CliResult<()> {
    println!("{}", Message::update_from(result).to_json()?);
    Ok(())
}

/// Print either the report or the JSON message
pub fn emit(result: &AggregateResult, json: bool) -> CliResult<()> {
    if json {
        print_message(result)
    } else {
        print_report(result);
        Ok(())
    }
}
