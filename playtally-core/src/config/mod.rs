//! Configuration structures and constants for the playtally-core library.
//!
//! This module covers where extraction rules come from and the timing used
//! by hosts that re-run the aggregation after page events.

mod builder;

use std::path::PathBuf;
use std::time::Duration;

pub use builder::CoreConfigBuilder;

use crate::error::{CoreError, CoreResult};
use crate::scrape::{RuleSet, ScrapeStrategy};

// Default constants

/// How long the popup waits for the page to answer a duration request.
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_millis(5000);

/// Delay before the first computation after the script is injected.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(500);

/// Delay before recomputing after a page load or in-page navigation, giving
/// lazily rendered playlist items time to appear.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Delay of the last follow-up computation after a page load, catching items
/// that render late.
pub const DEFAULT_FOLLOW_UP_DELAY: Duration = Duration::from_millis(3000);

/// Main configuration structure for the playtally-core library.
///
/// # Examples
///
/// ```rust
/// use playtally_core::config::CoreConfigBuilder;
/// use std::time::Duration;
///
/// let config = CoreConfigBuilder::new()
///     .response_timeout(Duration::from_secs(2))
///     .build();
/// assert!(config.rules_file.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Optional JSON rules file replacing the built-in extraction rules
    pub rules_file: Option<PathBuf>,

    /// Popup wait time for a reply from the page
    pub response_timeout: Duration,

    /// Delay before the first computation on a freshly loaded page
    pub initial_delay: Duration,

    /// Delay before recomputing after load or navigation
    pub settle_delay: Duration,

    /// Delay of the late follow-up computation after load
    pub follow_up_delay: Duration,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            rules_file: None,
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
            initial_delay: DEFAULT_INITIAL_DELAY,
            settle_delay: DEFAULT_SETTLE_DELAY,
            follow_up_delay: DEFAULT_FOLLOW_UP_DELAY,
        }
    }
}

impl CoreConfig {
    /// Checks that the configuration can be used.
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(path) = &self.rules_file {
            if !path.is_file() {
                return Err(CoreError::Config(format!(
                    "rules file '{}' does not exist",
                    path.display()
                )));
            }
        }

        if self.response_timeout.is_zero() {
            return Err(CoreError::Config("response timeout must be positive".to_string()));
        }

        if self.settle_delay > self.follow_up_delay {
            return Err(CoreError::Config(format!(
                "follow-up delay ({:?}) must not be shorter than settle delay ({:?})",
                self.follow_up_delay, self.settle_delay
            )));
        }

        Ok(())
    }

    /// Scrape strategy from the rules file, or the built-in one.
    pub fn strategy(&self) -> CoreResult<ScrapeStrategy> {
        match &self.rules_file {
            Some(path) => RuleSet::from_file(path)?.compile(),
            None => Ok(ScrapeStrategy::default()),
        }
    }

    /// Delays, measured from page load, at which the total is recomputed.
    #[must_use]
    pub fn load_schedule(&self) -> [Duration; 3] {
        [self.initial_delay, self.settle_delay, self.follow_up_delay]
    }
}
