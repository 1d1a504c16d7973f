// playtally-core/tests/aggregate_tests.rs

use playtally_core::{aggregate, format_duration};

#[test]
fn test_empty_collection() {
    let result = aggregate(Vec::<String>::new());
    assert_eq!(result.total_seconds, 0);
    assert_eq!(result.item_count, 0);
}

#[test]
fn test_minutes_and_seconds() {
    let result = aggregate(["12:34"]);
    assert_eq!(result.total_seconds, 754);
    assert_eq!(result.item_count, 1);
}

#[test]
fn test_hours_minutes_and_seconds() {
    let result = aggregate(["1:02:03"]);
    assert_eq!(result.total_seconds, 3723);
    assert_eq!(result.item_count, 1);
}

#[test]
fn test_noise_is_skipped() {
    let result = aggregate(["12:34", "1:02:03", "garbage", "", "0:00"]);
    assert_eq!(result.total_seconds, 4477);
    assert_eq!(result.item_count, 2);
}

#[test]
fn test_scraped_text_with_whitespace() {
    // Labels straight from element text keep their indentation.
    let labels = vec![
        "\n          3:15\n        ".to_string(),
        "\n          LIVE\n        ".to_string(),
        "  10:00:00 ".to_string(),
    ];
    let result = aggregate(&labels);
    assert_eq!(result.total_seconds, 36_195);
    assert_eq!(result.item_count, 2);
    assert_eq!(result.formatted_duration, "10 hours 3 minutes 15 seconds");
}

#[test]
fn test_format_examples() {
    assert_eq!(format_duration(3723), "1 hour 2 minutes 3 seconds");
    assert_eq!(format_duration(61), "1 minute 1 second");
    assert_eq!(format_duration(5), "0 minutes 5 seconds");
}

#[test]
fn test_hours_segment_only_from_one_hour() {
    for total in (0..7500).step_by(7) {
        let formatted = format_duration(total);
        assert!(formatted.contains(" minute"));
        assert!(formatted.contains(" second"));
        assert_eq!(formatted.contains(" hour"), total >= 3600, "{total}: {formatted}");
    }
}

#[test]
fn test_aggregate_is_idempotent() {
    let labels = ["4:01", "n/a", "22:10", "1:00:00", "0:00"];
    let first = aggregate(labels);
    let second = aggregate(labels);
    assert_eq!(first, second);
}
