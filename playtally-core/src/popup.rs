//! View state of the extension popup.
//!
//! The popup asks the active tab for its total, then waits for an
//! `updateDuration` message or gives up after the configured timeout.

use std::time::Duration;

use log::debug;

use crate::config::{CoreConfig, DEFAULT_RESPONSE_TIMEOUT};
use crate::message::Message;
use crate::page::is_youtube_playlist_url;

pub const NO_ACTIVE_TAB: &str = "Could not access active tab";
pub const NOT_A_PLAYLIST: &str = "Not currently viewing a YouTube playlist";
pub const NO_RESPONSE: &str =
    "The content script did not respond in time. Try refreshing the YouTube page.";
pub const NO_DURATIONS_WARNING: &str =
    "No video durations could be found. YouTube may have updated its page structure.";

/// What the popup currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupView {
    Loading,
    Duration {
        duration: String,
        video_count: usize,
        total_minutes: u64,
        warning: Option<String>,
    },
    Error(String),
}

#[derive(Debug)]
pub struct PopupController {
    view: PopupView,
    response_timeout: Duration,
}

impl Default for PopupController {
    fn default() -> Self {
        Self::new(DEFAULT_RESPONSE_TIMEOUT)
    }
}

impl PopupController {
    #[must_use]
    pub fn new(response_timeout: Duration) -> Self {
        Self {
            view: PopupView::Loading,
            response_timeout,
        }
    }

    #[must_use]
    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.response_timeout)
    }

    /// How long after [`open`](Self::open) a reply is still accepted.
    #[must_use]
    pub fn response_timeout(&self) -> Duration {
        self.response_timeout
    }

    #[must_use]
    pub fn view(&self) -> &PopupView {
        &self.view
    }

    /// Starts a refresh for the active tab's URL.
    ///
    /// Returns the request to send to the tab, or `None` when the popup went
    /// straight to an error.
    pub fn open(&mut self, active_url: Option<&str>) -> Option<Message> {
        let Some(url) = active_url else {
            self.view = PopupView::Error(NO_ACTIVE_TAB.to_string());
            return None;
        };

        if !is_youtube_playlist_url(url) {
            debug!("Popup opened on a non-playlist page: {url}");
            self.view = PopupView::Error(NOT_A_PLAYLIST.to_string());
            return None;
        }

        self.view = PopupView::Loading;
        Some(Message::GetDuration)
    }

    /// Applies a message from the tab. Returns whether it was consumed.
    pub fn receive(&mut self, message: &Message) -> bool {
        let Message::UpdateDuration {
            duration,
            video_count,
            total_minutes,
        } = message
        else {
            return false;
        };

        let warning = (*video_count == 0).then(|| NO_DURATIONS_WARNING.to_string());
        self.view = PopupView::Duration {
            duration: duration.clone(),
            video_count: *video_count,
            total_minutes: *total_minutes,
            warning,
        };
        true
    }

    /// Called when the response timeout elapses.
    pub fn timeout(&mut self) {
        if self.view == PopupView::Loading {
            self.view = PopupView::Error(NO_RESPONSE.to_string());
        }
    }

    #[must_use]
    pub fn is_expired(&self, elapsed: Duration) -> bool {
        elapsed >= self.response_timeout
    }

    /// Gives up on the request once `elapsed` reaches the response timeout.
    /// Returns whether the popup is still waiting.
    pub fn poll(&mut self, elapsed: Duration) -> bool {
        if self.is_expired(elapsed) {
            self.timeout();
        }
        self.view == PopupView::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::config::CoreConfigBuilder;

    const PLAYLIST_URL: &str = "https://www.youtube.com/playlist?list=PL1";

    #[test]
    fn test_open_without_tab() {
        let mut popup = PopupController::default();
        assert_eq!(popup.open(None), None);
        assert_eq!(popup.view(), &PopupView::Error(NO_ACTIVE_TAB.to_string()));
    }

    #[test]
    fn test_open_on_other_page() {
        let mut popup = PopupController::default();
        assert_eq!(popup.open(Some("https://www.youtube.com/feed/trending")), None);
        assert_eq!(popup.view(), &PopupView::Error(NOT_A_PLAYLIST.to_string()));
    }

    #[test]
    fn test_update_after_request() {
        let mut popup = PopupController::default();
        assert_eq!(popup.open(Some(PLAYLIST_URL)), Some(Message::GetDuration));

        assert!(popup.receive(&Message::update_from(&aggregate(["10:00", "5:00"]))));
        assert_eq!(
            popup.view(),
            &PopupView::Duration {
                duration: "15 minutes 0 seconds".to_string(),
                video_count: 2,
                total_minutes: 15,
                warning: None,
            }
        );

        popup.timeout();
        assert!(matches!(popup.view(), PopupView::Duration { .. }));
    }

    #[test]
    fn test_zero_items_carry_warning() {
        let mut popup = PopupController::default();
        popup.open(Some(PLAYLIST_URL));
        popup.receive(&Message::update_from(&aggregate(Vec::<&str>::new())));
        match popup.view() {
            PopupView::Duration { warning, .. } => {
                assert_eq!(warning.as_deref(), Some(NO_DURATIONS_WARNING));
            }
            other => panic!("Unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_poll_honors_configured_timeout() {
        let config = CoreConfigBuilder::new()
            .response_timeout(Duration::from_secs(2))
            .build();
        let mut popup = PopupController::from_config(&config);
        assert_eq!(popup.response_timeout(), Duration::from_secs(2));
        popup.open(Some(PLAYLIST_URL));

        assert!(popup.poll(Duration::from_millis(1999)));
        assert!(!popup.poll(Duration::from_secs(2)));
        assert_eq!(popup.view(), &PopupView::Error(NO_RESPONSE.to_string()));
    }

    #[test]
    fn test_default_timeout_is_five_seconds() {
        let popup = PopupController::default();
        assert!(!popup.is_expired(Duration::from_millis(4999)));
        assert!(popup.is_expired(Duration::from_millis(5000)));
    }

    #[test]
    fn test_timeout_while_loading() {
        let mut popup = PopupController::default();
        popup.open(Some(PLAYLIST_URL));
        assert!(!popup.receive(&Message::GetDuration));
        popup.timeout();
        assert_eq!(popup.view(), &PopupView::Error(NO_RESPONSE.to_string()));
    }
}
