//! Decides when a page needs its total recomputed.

/// Events that can cause a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The page finished loading.
    PageLoad,
    /// The watched container changed; `added_nodes` counts inserted nodes.
    ContentChanged { added_nodes: usize },
    /// The URL changed without a full page load.
    Navigation,
    /// The popup asked for the current total.
    PopupRequest,
}

/// Tracks the last URL seen so in-page navigation can be detected.
#[derive(Debug, Default)]
pub struct ChangeWatcher {
    last_url: Option<String>,
}

impl ChangeWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a known URL, as when the script is injected into a page.
    #[must_use]
    pub fn starting_at(url: impl Into<String>) -> Self {
        Self { last_url: Some(url.into()) }
    }

    #[must_use]
    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }

    /// Records `url` and reports a navigation if it differs from the last one.
    pub fn observe_url(&mut self, url: &str) -> Option<Trigger> {
        if self.last_url.as_deref() == Some(url) {
            return None;
        }
        self.last_url = Some(url.to_string());
        Some(Trigger::Navigation)
    }

    /// Content changes only matter when something was added.
    #[must_use]
    pub fn should_recalculate(&self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::ContentChanged { added_nodes } => added_nodes > 0,
            Trigger::PageLoad | Trigger::Navigation | Trigger::PopupRequest => true,
        }
    }
}
