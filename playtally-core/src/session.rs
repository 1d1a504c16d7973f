//! Per-tab orchestration: scrape, aggregate, update the widget, and produce
//! the message for the popup.
//!
//! A `PlaylistSession` owns all state that outlives one computation (the
//! watcher's last URL and the widget's dismissal flag). The aggregation it
//! runs is recomputed from scratch every time.

use std::time::Duration;

use log::{debug, info};

use crate::aggregate::{AggregateResult, aggregate};
use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::message::Message;
use crate::page::is_playlist_page;
use crate::scrape::ScrapeStrategy;
use crate::watcher::{ChangeWatcher, Trigger};
use crate::widget::DurationWidget;

#[derive(Debug)]
pub struct PlaylistSession {
    strategy: ScrapeStrategy,
    widget: DurationWidget,
    watcher: ChangeWatcher,
    // initial, settle and follow-up delays
    schedule: [Duration; 3],
}

impl Default for PlaylistSession {
    fn default() -> Self {
        Self::new(ScrapeStrategy::default())
    }
}

impl PlaylistSession {
    #[must_use]
    pub fn new(strategy: ScrapeStrategy) -> Self {
        Self {
            strategy,
            widget: DurationWidget::new(),
            watcher: ChangeWatcher::new(),
            schedule: CoreConfig::default().load_schedule(),
        }
    }

    /// Session using the configured rules and recalculation delays.
    pub fn from_config(config: &CoreConfig) -> CoreResult<Self> {
        Ok(Self {
            schedule: config.load_schedule(),
            ..Self::new(config.strategy()?)
        })
    }

    /// Delay before the first computation once the script is on the page.
    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        self.schedule[0]
    }

    /// Delays after `trigger` at which the host should call [`handle`](Self::handle).
    ///
    /// A load is followed by a settle pass and a late follow-up for items
    /// that render slowly; navigation only needs the settle pass.
    #[must_use]
    pub fn recalculation_delays(&self, trigger: Trigger) -> Vec<Duration> {
        if !self.watcher.should_recalculate(trigger) {
            return Vec::new();
        }
        let [_, settle, follow_up] = self.schedule;
        match trigger {
            Trigger::PageLoad => vec![settle, follow_up],
            Trigger::Navigation => vec![settle],
            Trigger::ContentChanged { .. } | Trigger::PopupRequest => vec![Duration::ZERO],
        }
    }

    #[must_use]
    pub fn widget(&self) -> &DurationWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut DurationWidget {
        &mut self.widget
    }

    #[must_use]
    pub fn watcher(&self) -> &ChangeWatcher {
        &self.watcher
    }

    /// Raw duration labels found in `document`.
    #[must_use]
    pub fn labels(&self, document: &str) -> Vec<String> {
        self.strategy.extract_labels(document)
    }

    /// Extracts and sums the labels of `document` without touching any state.
    #[must_use]
    pub fn compute(&self, document: &str) -> AggregateResult {
        aggregate(self.labels(document))
    }

    /// Recomputes the total for the page at `url`.
    ///
    /// Returns the `updateDuration` message, which is produced even when no
    /// durations were found, or `None` when the page is not a playlist.
    pub fn refresh(&mut self, url: &str, document: &str) -> Option<Message> {
        if !is_playlist_page(url) {
            debug!("Skipping non-playlist page: {url}");
            return None;
        }

        let result = self.compute(document);
        self.widget.update(&result);
        info!(
            "Playlist duration calculated: {} ({} videos)",
            result.formatted_duration, result.item_count
        );
        Some(Message::update_from(&result))
    }

    /// Handles a page event, recomputing when it warrants it.
    pub fn handle(&mut self, trigger: Trigger, url: &str, document: &str) -> Option<Message> {
        if !self.watcher.should_recalculate(trigger) {
            return None;
        }

        if trigger == Trigger::Navigation {
            // Navigation reported by the host, not by observe_url.
            self.watcher.observe_url(url);
            self.widget.clear();
        }

        // A dismissed widget stops automatic updates; the popup can still ask.
        if self.widget.is_dismissed() && trigger != Trigger::PopupRequest {
            return None;
        }

        self.refresh(url, document)
    }

    /// Feeds the current URL to the watcher and handles a navigation if the
    /// URL changed.
    pub fn poll_url(&mut self, url: &str, document: &str) -> Option<Message> {
        match self.watcher.observe_url(url) {
            Some(trigger) => {
                info!("URL changed to {url}");
                self.widget.clear();
                if self.widget.is_dismissed() {
                    return None;
                }
                debug!("Handling {:?}", trigger);
                self.refresh(url, document)
            }
            None => None,
        }
    }
}
