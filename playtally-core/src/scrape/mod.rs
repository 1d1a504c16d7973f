//! Locating duration labels in page markup.
//!
//! The host page's layout changes often, so label extraction is an ordered,
//! replaceable list of rules rather than hard-coded selectors. Whatever the
//! rules find is handed to the aggregator as plain strings.

pub mod rules;
pub mod strategy;

pub use rules::{DEFAULT_ITEM_BOUNDARY, DEFAULT_RULES, ExtractionRule, RuleSet, RuleSpec};
pub use strategy::ScrapeStrategy;
