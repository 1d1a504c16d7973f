//! Extraction rules and their on-disk representation.
//!
//! A rule is a regular expression with a named `label` capture group that
//! selects the text of one duration-bearing element. Rule sets are plain JSON
//! so that they can be edited when the host page changes its markup:
//!
//! ```json
//! {
//!   "item_boundary": "<ytd-playlist-(?:panel-)?video-renderer\\b",
//!   "rules": [
//!     { "name": "player-duration", "pattern": "class=\"ytp-time-duration\">(?P<label>[^<]*)<" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::scrape::strategy::ScrapeStrategy;

/// Name of the capture group that every rule pattern must define.
pub const LABEL_GROUP: &str = "label";

/// Start of one playlist entry in the page markup.
pub const DEFAULT_ITEM_BOUNDARY: &str = r"<ytd-playlist-(?:panel-)?video-renderer\b";

/// Built-in rules, most specific first.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    (
        "thumbnail-overlay-span",
        r#"<span\b[^>]*\bclass="[^"]*\bytd-thumbnail-overlay-time-status-renderer\b[^"]*"[^>]*>(?P<label>[^<]*)<"#,
    ),
    (
        "thumbnail-overlay-child",
        r"<ytd-thumbnail-overlay-time-status-renderer\b[^>]*>\s*(?:<[^>]*>\s*)*?<span\b[^>]*>(?P<label>[^<]*)<",
    ),
    (
        "player-duration",
        r#"<span\b[^>]*\bclass="[^"]*\bytp-time-duration\b[^"]*"[^>]*>(?P<label>[^<]*)<"#,
    ),
    (
        "video-duration-renderer",
        r#"<[a-z][a-z0-9-]*\b[^>]*\bclass="[^"]*\bytd-video-duration-renderer\b[^"]*"[^>]*>(?P<label>[^<]*)<"#,
    ),
    (
        "aria-label-duration",
        r#"<span\b[^>]*\baria-label="[^"]*(?:minutes|hour)[^"]*"[^>]*>(?P<label>[^<]*)<"#,
    ),
];

/// A compiled extraction rule.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    name: String,
    pattern: Regex,
}

impl ExtractionRule {
    /// Compiles `pattern`, which must contain a `label` capture group.
    pub fn new(name: impl Into<String>, pattern: &str) -> CoreResult<Self> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|e| CoreError::InvalidRule {
            name: name.clone(),
            reason: e.to_string(),
        })?;

        if !regex.capture_names().flatten().any(|group| group == LABEL_GROUP) {
            return Err(CoreError::InvalidRule {
                name,
                reason: format!("pattern has no '{LABEL_GROUP}' capture group"),
            });
        }

        Ok(Self { name, pattern: regex })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label text of the first element this rule selects in `text`.
    #[must_use]
    pub fn first_label<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.name(LABEL_GROUP))
            .map(|m| m.as_str())
    }

    /// Every label this rule selects, with the byte offset of the label text.
    pub fn labels<'t>(&self, text: &'t str) -> impl Iterator<Item = (usize, &'t str)> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.name(LABEL_GROUP))
            .map(|m| (m.start(), m.as_str()))
    }
}

/// Serializable form of one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub name: String,
    pub pattern: String,
}

/// Serializable form of a whole strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub item_boundary: Option<String>,
    pub rules: Vec<RuleSpec>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            item_boundary: Some(DEFAULT_ITEM_BOUNDARY.to_string()),
            rules: DEFAULT_RULES
                .iter()
                .map(|(name, pattern)| RuleSpec {
                    name: (*name).to_string(),
                    pattern: (*pattern).to_string(),
                })
                .collect(),
        }
    }
}

impl RuleSet {
    /// Reads a JSON rule set from disk.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CoreError::PathError(format!("Failed to read rules file '{}': {}", path.display(), e))
        })?;
        let rule_set = Self::from_json(&contents)?;
        debug!(
            "Loaded {} extraction rule(s) from {}",
            rule_set.rules.len(),
            path.display()
        );
        Ok(rule_set)
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compiles every pattern into a [`ScrapeStrategy`].
    pub fn compile(&self) -> CoreResult<ScrapeStrategy> {
        if self.rules.is_empty() {
            return Err(CoreError::Config("rule set contains no extraction rules".to_string()));
        }

        let item_boundary = self
            .item_boundary
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| CoreError::InvalidRule {
                    name: "item_boundary".to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let rules = self
            .rules
            .iter()
            .map(|spec| ExtractionRule::new(spec.name.clone(), &spec.pattern))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(ScrapeStrategy::new(item_boundary, rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_compile() {
        let strategy = RuleSet::default().compile().unwrap();
        assert_eq!(strategy.rules().len(), DEFAULT_RULES.len());
    }

    #[test]
    fn test_rule_without_label_group_is_rejected() {
        let err = ExtractionRule::new("bare", r"\d+:\d+").unwrap_err();
        assert!(matches!(err, CoreError::InvalidRule { ref name, .. } if name == "bare"));
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        assert!(matches!(
            ExtractionRule::new("broken", r"(?P<label>[unclosed"),
            Err(CoreError::InvalidRule { .. })
        ));
    }

    #[test]
    fn test_empty_rule_set_is_a_config_error() {
        let rule_set = RuleSet { item_boundary: None, rules: Vec::new() };
        assert!(matches!(rule_set.compile(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_item_boundary_is_optional_in_json() {
        let rule_set = RuleSet::from_json(
            r#"{"rules":[{"name":"plain","pattern":"<b>(?P<label>[^<]*)</b>"}]}"#,
        )
        .unwrap();
        assert_eq!(rule_set.item_boundary, None);
        assert_eq!(rule_set.rules[0].name, "plain");
    }

    #[test]
    fn test_first_label() {
        let rule = ExtractionRule::new("bold", r"<b>(?P<label>[^<]*)</b>").unwrap();
        assert_eq!(rule.first_label("<i>x</i><b>3:10</b><b>4:00</b>"), Some("3:10"));
        assert_eq!(rule.first_label("<i>x</i>"), None);
    }
}
