//! Parsing of clock-style duration labels (`M:SS`, `MM:SS`, `H:MM:SS`).
//!
//! Labels come straight from page markup, so most of what reaches this module
//! is noise: empty spans, live-stream badges, fragments of accessibility text.
//! Anything that is not a well-formed positive clock value is rejected with a
//! reason that callers can log, never with an error.

use std::fmt;

/// Shortest label that can still be a clock value, e.g. `1:5`. Anything
/// shorter is treated as stray UI text.
pub const MIN_LABEL_LEN: usize = 3;

const SEPARATOR: char = ':';

/// A duration in whole seconds parsed from exactly one label. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedDuration(u64);

impl ParsedDuration {
    /// Number of seconds represented by the label.
    #[must_use]
    pub fn seconds(self) -> u64 {
        self.0
    }
}

impl From<ParsedDuration> for u64 {
    fn from(duration: ParsedDuration) -> Self {
        duration.0
    }
}

/// Why a label did not produce a duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelRejection {
    /// Nothing left after trimming.
    Empty,
    /// Shorter than [`MIN_LABEL_LEN`] characters after trimming.
    TooShort,
    /// A segment between separators is not a base-10 integer.
    InvalidSegment(String),
    /// Neither two (`M:SS`) nor three (`H:MM:SS`) segments.
    SegmentCount(usize),
    /// A segment carried a minus sign.
    NegativeSegment,
    /// The segments add up to zero seconds.
    NonPositive,
    /// The computed value does not fit in 64 bits.
    Overflow,
}

impl fmt::Display for LabelRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty label"),
            Self::TooShort => write!(f, "label shorter than {MIN_LABEL_LEN} characters"),
            Self::InvalidSegment(segment) => write!(f, "segment '{segment}' is not an integer"),
            Self::SegmentCount(count) => write!(f, "expected 2 or 3 segments, found {count}"),
            Self::NegativeSegment => write!(f, "negative segment"),
            Self::NonPositive => write!(f, "duration is not positive"),
            Self::Overflow => write!(f, "duration overflows"),
        }
    }
}

/// Parses a raw label into a positive number of seconds.
///
/// Two segments are read as minutes and seconds, three as hours, minutes and
/// seconds. Segments are not range-checked, so `1:75` is accepted as 135
/// seconds, matching how the values are summed on the page.
///
/// # Examples
///
/// ```
/// use playtally_core::label::{parse_label, LabelRejection};
///
/// assert_eq!(parse_label("12:34").unwrap().seconds(), 754);
/// assert_eq!(parse_label(" 1:02:03 ").unwrap().seconds(), 3723);
/// assert_eq!(parse_label("0:00"), Err(LabelRejection::NonPositive));
/// ```
pub fn parse_label(label: &str) -> Result<ParsedDuration, LabelRejection> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(LabelRejection::Empty);
    }
    if trimmed.chars().count() < MIN_LABEL_LEN {
        return Err(LabelRejection::TooShort);
    }

    let segments = trimmed
        .split(SEPARATOR)
        .map(parse_segment)
        .collect::<Result<Vec<i64>, _>>()?;

    if segments.iter().any(|&value| value < 0) {
        return Err(LabelRejection::NegativeSegment);
    }

    let total = match segments.as_slice() {
        [minutes, seconds] => combine(&[(*minutes, 60), (*seconds, 1)]),
        [hours, minutes, seconds] => combine(&[(*hours, 3600), (*minutes, 60), (*seconds, 1)]),
        other => return Err(LabelRejection::SegmentCount(other.len())),
    }
    .ok_or(LabelRejection::Overflow)?;

    if total <= 0 {
        return Err(LabelRejection::NonPositive);
    }

    u64::try_from(total)
        .map(ParsedDuration)
        .map_err(|_| LabelRejection::Overflow)
}

fn parse_segment(segment: &str) -> Result<i64, LabelRejection> {
    segment
        .parse::<i64>()
        .map_err(|_| LabelRejection::InvalidSegment(segment.to_string()))
}

// Weighted sum with overflow detection.
fn combine(parts: &[(i64, i64)]) -> Option<i64> {
    parts.iter().try_fold(0i64, |acc, &(value, weight)| {
        value.checked_mul(weight).and_then(|scaled| acc.checked_add(scaled))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(label: &str) -> Option<u64> {
        parse_label(label).ok().map(ParsedDuration::seconds)
    }

    #[test]
    fn test_two_segment_labels() {
        assert_eq!(seconds("12:34"), Some(754));
        assert_eq!(seconds("0:01"), Some(1));
        assert_eq!(seconds("9:59"), Some(599));
        assert_eq!(seconds("1:5"), Some(65));
    }

    #[test]
    fn test_three_segment_labels() {
        assert_eq!(seconds("1:02:03"), Some(3723));
        assert_eq!(seconds("10:00:00"), Some(36000));
        assert_eq!(seconds("0:00:01"), Some(1));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(seconds("\n   4:20  \n"), Some(260));
    }

    #[test]
    fn test_short_and_empty_labels() {
        assert_eq!(parse_label(""), Err(LabelRejection::Empty));
        assert_eq!(parse_label("   "), Err(LabelRejection::Empty));
        assert_eq!(parse_label("5"), Err(LabelRejection::TooShort));
        assert_eq!(parse_label(":5"), Err(LabelRejection::TooShort));
        assert_eq!(parse_label("::"), Err(LabelRejection::TooShort));
    }

    #[test]
    fn test_non_numeric_segments() {
        assert!(matches!(parse_label(":::"), Err(LabelRejection::InvalidSegment(_))));
        assert!(matches!(parse_label("1::"), Err(LabelRejection::InvalidSegment(_))));
        assert!(matches!(parse_label("12 minutes"), Err(LabelRejection::InvalidSegment(_))));
        assert!(matches!(parse_label("LIVE"), Err(LabelRejection::InvalidSegment(_))));
        assert!(matches!(parse_label("1:2.5"), Err(LabelRejection::InvalidSegment(_))));
        assert!(matches!(parse_label("1: 30"), Err(LabelRejection::InvalidSegment(_))));
    }

    #[test]
    fn test_single_numeric_segment_is_rejected() {
        assert_eq!(parse_label("1234"), Err(LabelRejection::SegmentCount(1)));
    }

    #[test]
    fn test_too_many_segments() {
        assert_eq!(parse_label("1:02:03:04"), Err(LabelRejection::SegmentCount(4)));
    }

    #[test]
    fn test_zero_and_negative_values() {
        assert_eq!(parse_label("0:00"), Err(LabelRejection::NonPositive));
        assert_eq!(parse_label("0:00:00"), Err(LabelRejection::NonPositive));
        assert_eq!(parse_label("-1:30"), Err(LabelRejection::NegativeSegment));
        assert_eq!(parse_label("1:-5"), Err(LabelRejection::NegativeSegment));
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert_eq!(
            parse_label("9223372036854775807:00:00"),
            Err(LabelRejection::Overflow)
        );
    }

    #[test]
    fn test_unnormalized_segments_are_summed() {
        assert_eq!(seconds("1:75"), Some(135));
        assert_eq!(seconds("0:90:00"), Some(5400));
    }
}
