//! Summation of scraped duration labels into a single playlist total.
//!
//! [`aggregate`] is the heart of the library. It is a pure function over an
//! already-collected set of labels: no state survives between calls, and the
//! order of the labels does not influence the result.

use log::trace;
use serde::Serialize;

use crate::formatting::{format_compact, format_duration, rounded_minutes};
use crate::label::parse_label;

/// Totals derived from one pass over a page's duration labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    /// Sum of every accepted label, in seconds.
    pub total_seconds: u64,
    /// Number of labels that parsed to a positive duration.
    pub item_count: usize,
    /// `total_seconds` rendered by [`format_duration`].
    pub formatted_duration: String,
}

impl AggregateResult {
    fn from_totals(total_seconds: u64, item_count: usize) -> Self {
        Self {
            total_seconds,
            item_count,
            formatted_duration: format_duration(total_seconds),
        }
    }

    /// True when no label on the page produced a duration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Mean item length in seconds, or `None` when nothing was counted.
    #[must_use]
    pub fn average_seconds_per_item(&self) -> Option<f64> {
        (self.item_count > 0).then(|| self.total_seconds as f64 / self.item_count as f64)
    }

    /// Total length in whole minutes, rounded half up.
    #[must_use]
    pub fn total_minutes(&self) -> u64 {
        rounded_minutes(self.total_seconds)
    }

    /// Compact `1h 2m 3s` rendering used as the widget headline.
    #[must_use]
    pub fn compact_duration(&self) -> String {
        format_compact(self.total_seconds)
    }
}

/// Parses every label and sums the ones that are valid clock values.
///
/// Rejected labels are skipped silently. An empty input yields a result with
/// `item_count == 0`, which callers present as "nothing found".
///
/// # Examples
///
/// ```
/// use playtally_core::aggregate;
///
/// let result = aggregate(["12:34", "1:02:03", "garbage", "", "0:00"]);
/// assert_eq!(result.total_seconds, 4477);
/// assert_eq!(result.item_count, 2);
/// ```
pub fn aggregate<I, S>(labels: I) -> AggregateResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (total_seconds, item_count) =
        labels
            .into_iter()
            .fold((0u64, 0usize), |(total, count), label| {
                match parse_label(label.as_ref()) {
                    Ok(duration) => (total.saturating_add(duration.seconds()), count + 1),
                    Err(reason) => {
                        trace!("Skipping label {:?}: {}", label.as_ref(), reason);
                        (total, count)
                    }
                }
            });

    AggregateResult::from_totals(total_seconds, item_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let result = aggregate(Vec::<String>::new());
        assert_eq!(result.total_seconds, 0);
        assert_eq!(result.item_count, 0);
        assert!(result.is_empty());
        assert_eq!(result.average_seconds_per_item(), None);
        assert_eq!(result.formatted_duration, "0 minutes 0 seconds");
    }

    #[test]
    fn test_single_labels() {
        let result = aggregate(["12:34"]);
        assert_eq!((result.total_seconds, result.item_count), (754, 1));

        let result = aggregate(["1:02:03"]);
        assert_eq!((result.total_seconds, result.item_count), (3723, 1));
        assert_eq!(result.formatted_duration, "1 hour 2 minutes 3 seconds");
    }

    #[test]
    fn test_mixed_input_counts_only_valid_labels() {
        let result = aggregate(["12:34", "1:02:03", "garbage", "", "0:00"]);
        assert_eq!(result.total_seconds, 4477);
        assert_eq!(result.item_count, 2);
        assert_eq!(result.formatted_duration, "1 hour 14 minutes 37 seconds");
        assert_eq!(result.total_minutes(), 75);
        assert_eq!(result.average_seconds_per_item(), Some(2238.5));
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = aggregate(["3:00", "1:00:00", "0:45"]);
        let backward = aggregate(["0:45", "1:00:00", "3:00"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let labels = vec!["4:01".to_string(), "LIVE".to_string(), "22:10".to_string()];
        assert_eq!(aggregate(&labels), aggregate(&labels));
    }

    #[test]
    fn test_compact_duration() {
        assert_eq!(aggregate(["59:59", "0:01"]).compact_duration(), "1h 0m 0s");
    }
}
