//! Messages exchanged between the popup and the page-embedded script.
//!
//! Messages are JSON objects tagged by an `action` field:
//!
//! ```json
//! {"action": "getDuration"}
//! {"action": "updateDuration", "duration": "1 hour 2 minutes 3 seconds", "videoCount": 1, "totalMinutes": 62}
//! ```

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateResult;
use crate::error::CoreResult;

/// Text sent in place of a duration when the page had no countable items.
pub const NO_DURATIONS_FOUND: &str = "No video durations found";

/// A message crossing the popup/page boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Message {
    /// Popup asks the page to recompute and report its total.
    GetDuration,
    /// Page reports a freshly computed total.
    #[serde(rename_all = "camelCase")]
    UpdateDuration {
        duration: String,
        video_count: usize,
        total_minutes: u64,
    },
}

impl Message {
    /// Builds the `updateDuration` payload for an aggregate.
    #[must_use]
    pub fn update_from(result: &AggregateResult) -> Self {
        let duration = if result.is_empty() {
            NO_DURATIONS_FOUND.to_string()
        } else {
            result.formatted_duration.clone()
        };

        Self::UpdateDuration {
            duration,
            video_count: result.item_count,
            total_minutes: result.total_minutes(),
        }
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&AggregateResult> for Message {
    fn from(result: &AggregateResult) -> Self {
        Self::update_from(result)
    }
}
