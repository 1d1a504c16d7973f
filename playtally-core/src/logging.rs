//! Logging setup shared by the library's consumers.
//!
//! Uses the `log` facade with `env_logger` as the backend. `RUST_LOG`
//! overrides the level chosen from the verbose flag:
//! - RUST_LOG=info (default): totals per computation
//! - RUST_LOG=debug: scrape statistics and rules file loading
//! - RUST_LOG=trace: every skipped label and why

use std::io::Write;

use log::{Level, LevelFilter, debug};
use owo_colors::OwoColorize;
use supports_color::Stream;

/// Initialize the logger for playtally.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    init_with_level(level);
}

/// Initialize the logger with a specific log level.
pub fn init_with_level(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .format(|buf, record| {
            let column = level_column(record.level(), color_stderr());
            writeln!(buf, "{} {} {}", buf.timestamp(), column, record.args())
        })
        .filter(None, level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init();

    if result.is_ok() {
        debug!("Logger initialized with level: {}", level);
    }
}

fn color_stderr() -> bool {
    supports_color::on_cached(Stream::Stderr).is_some()
}

/// Fixed-width level name, colored when `color` is set.
fn level_column(level: Level, color: bool) -> String {
    let name = match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN ",
        Level::Info => "INFO ",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    if !color {
        return name.to_string();
    }
    match level {
        Level::Error => name.bright_red().to_string(),
        Level::Warn => name.yellow().to_string(),
        Level::Info => name.green().to_string(),
        Level::Debug => name.blue().to_string(),
        Level::Trace => name.magenta().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_level_column_has_no_escapes() {
        assert_eq!(level_column(Level::Warn, false), "WARN ");
        assert_eq!(level_column(Level::Debug, false), "DEBUG");
    }

    #[test]
    fn test_colored_level_column() {
        let column = level_column(Level::Error, true);
        assert!(column.contains("ERROR"));
        assert!(column.contains('\u{1b}'));
    }
}
