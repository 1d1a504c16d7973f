//! Human-readable renderings of a total number of seconds.

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Hours, minutes and seconds of a total, with minutes and seconds below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Breakdown {
    #[must_use]
    pub fn from_seconds(total_seconds: u64) -> Self {
        Self {
            hours: total_seconds / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
        }
    }
}

/// Formats seconds as words, e.g. 3723 -> "1 hour 2 minutes 3 seconds".
///
/// The hours segment only appears for totals of an hour or more; minutes and
/// seconds are always present, even when zero.
#[must_use]
pub fn format_duration(total_seconds: u64) -> String {
    let Breakdown { hours, minutes, seconds } = Breakdown::from_seconds(total_seconds);

    let mut formatted = String::new();
    if hours > 0 {
        formatted.push_str(&counted(hours, "hour"));
        formatted.push(' ');
    }
    formatted.push_str(&counted(minutes, "minute"));
    formatted.push(' ');
    formatted.push_str(&counted(seconds, "second"));
    formatted
}

/// Formats seconds in the compact widget style, e.g. 3723 -> "1h 2m 3s".
#[must_use]
pub fn format_compact(total_seconds: u64) -> String {
    let Breakdown { hours, minutes, seconds } = Breakdown::from_seconds(total_seconds);
    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else {
        format!("{minutes}m {seconds}s")
    }
}

/// Whole minutes in a total, rounded half up (90s -> 2, 89s -> 1).
#[must_use]
pub fn rounded_minutes(total_seconds: u64) -> u64 {
    total_seconds / SECONDS_PER_MINUTE + u64::from(total_seconds % SECONDS_PER_MINUTE >= 30)
}

fn counted(value: u64, noun: &str) -> String {
    if value == 1 {
        format!("{value} {noun}")
    } else {
        format!("{value} {noun}s")
    }
}
