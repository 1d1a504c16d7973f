//! State of the floating on-page duration panel.
//!
//! Only the content model lives here. How the panel is painted and moved
//! around is up to the host.

use crate::aggregate::AggregateResult;

/// Content shown in the panel for one aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetPanel {
    pub headline: String,
    pub video_count: usize,
    pub total_minutes: u64,
    pub average_minutes_per_video: f64,
}

impl WidgetPanel {
    #[must_use]
    pub fn from_result(result: &AggregateResult) -> Self {
        let average_seconds = result.average_seconds_per_item().unwrap_or(0.0);
        Self {
            headline: result.compact_duration(),
            video_count: result.item_count,
            total_minutes: result.total_minutes(),
            average_minutes_per_video: average_seconds / 60.0,
        }
    }

    /// Text lines of the panel, top to bottom.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        vec![
            "Playlist Duration".to_string(),
            format!("{} videos", self.video_count),
            self.headline.clone(),
            format!("Total: {} minutes", self.total_minutes),
            format!("~{:.1} min/video", self.average_minutes_per_video),
        ]
    }
}

/// The panel plus the per-session "dismissed" flag.
#[derive(Debug, Default)]
pub struct DurationWidget {
    dismissed: bool,
    panel: Option<WidgetPanel>,
}

impl DurationWidget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows or refreshes the panel. Returns whether anything is displayed.
    ///
    /// Nothing is shown once the user dismissed the panel, or when the
    /// aggregate found no items.
    pub fn update(&mut self, result: &AggregateResult) -> bool {
        if self.dismissed || result.is_empty() {
            return false;
        }
        self.panel = Some(WidgetPanel::from_result(result));
        true
    }

    /// Closes the panel for the rest of the session.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
        self.panel = None;
    }

    /// Removes the panel ahead of a page change without touching the flag.
    pub fn clear(&mut self) {
        self.panel = None;
    }

    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    #[must_use]
    pub fn panel(&self) -> Option<&WidgetPanel> {
        self.panel.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;

    #[test]
    fn test_panel_lines() {
        let panel = WidgetPanel::from_result(&aggregate(["12:34", "1:02:03"]));
        assert_eq!(
            panel.render_lines(),
            vec![
                "Playlist Duration",
                "2 videos",
                "1h 14m 37s",
                "Total: 75 minutes",
                "~37.3 min/video",
            ]
        );
    }

    #[test]
    fn test_empty_result_shows_nothing() {
        let mut widget = DurationWidget::new();
        assert!(!widget.update(&aggregate(["LIVE"])));
        assert!(widget.panel().is_none());
    }

    #[test]
    fn test_dismissal_sticks_across_updates() {
        let mut widget = DurationWidget::new();
        assert!(widget.update(&aggregate(["3:00"])));
        widget.dismiss();
        assert!(widget.panel().is_none());
        assert!(!widget.update(&aggregate(["4:00"])));
        assert!(widget.is_dismissed());
    }

    #[test]
    fn test_clear_keeps_widget_usable() {
        let mut widget = DurationWidget::new();
        widget.update(&aggregate(["3:00"]));
        widget.clear();
        assert!(widget.panel().is_none());
        assert!(widget.update(&aggregate(["4:00"])));
        assert_eq!(widget.panel().unwrap().headline, "4m 0s");
    }
}
