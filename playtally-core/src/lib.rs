//! Core library for summing the durations of a video playlist page.
//!
//! Duration labels (`12:34`, `1:02:03`) are scraped from the page markup by a
//! replaceable [`ScrapeStrategy`], parsed, and summed by [`aggregate`] into an
//! [`AggregateResult`]. The surrounding modules model the consumers of that
//! result: the on-page widget, the popup, and the watcher that decides when to
//! recompute.
//!
//! ## Usage Example
//!
//! ```rust
//! use playtally_core::{Message, PlaylistSession, aggregate};
//!
//! let result = aggregate(["12:34", "1:02:03", "LIVE"]);
//! assert_eq!(result.formatted_duration, "1 hour 14 minutes 37 seconds");
//! assert_eq!(result.item_count, 2);
//!
//! let mut session = PlaylistSession::default();
//! let page = r#"<span class="ytp-time-duration">4:20</span>"#;
//! let message = session.refresh("https://www.youtube.com/playlist?list=PL1", page);
//! assert!(matches!(message, Some(Message::UpdateDuration { video_count: 1, .. })));
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod formatting;
pub mod label;
pub mod logging;
pub mod message;
pub mod page;
pub mod popup;
pub mod scrape;
pub mod session;
pub mod watcher;
pub mod widget;

// Re-exports for public API
pub use aggregate::{AggregateResult, aggregate};
pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use formatting::{format_compact, format_duration};
pub use label::{LabelRejection, ParsedDuration, parse_label};
pub use message::{Message, NO_DURATIONS_FOUND};
pub use page::{PageKind, classify_url, is_playlist_page};
pub use popup::{PopupController, PopupView};
pub use scrape::{RuleSet, ScrapeStrategy};
pub use session::PlaylistSession;
pub use watcher::{ChangeWatcher, Trigger};
pub use widget::{DurationWidget, WidgetPanel};
