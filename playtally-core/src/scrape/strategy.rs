//! Applying an ordered rule list to a page document.

use std::collections::BTreeMap;
use std::ops::Range;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::scrape::rules::{ExtractionRule, RuleSet};

static DEFAULT_STRATEGY: Lazy<ScrapeStrategy> = Lazy::new(|| {
    RuleSet::default()
        .compile()
        .expect("built-in extraction rules are valid")
});

/// Locates duration labels in a page document.
///
/// When an item boundary is configured and present, the document is cut into
/// items and each item contributes at most one label: the first match of the
/// first rule (in order) that matches inside it. Otherwise every rule runs
/// over the whole document and each label position is reported once.
#[derive(Debug, Clone)]
pub struct ScrapeStrategy {
    item_boundary: Option<Regex>,
    rules: Vec<ExtractionRule>,
}

impl Default for ScrapeStrategy {
    fn default() -> Self {
        DEFAULT_STRATEGY.clone()
    }
}

impl ScrapeStrategy {
    #[must_use]
    pub fn new(item_boundary: Option<Regex>, rules: Vec<ExtractionRule>) -> Self {
        Self { item_boundary, rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[ExtractionRule] {
        &self.rules
    }

    /// Raw label text for every duration-bearing element, in document order.
    #[must_use]
    pub fn extract_labels(&self, document: &str) -> Vec<String> {
        let items = self.item_ranges(document);

        let labels: Vec<String> = if items.is_empty() {
            self.labels_in_document(document)
        } else {
            let labels: Vec<String> = items
                .into_iter()
                .filter_map(|range| self.first_label(&document[range]))
                .map(str::to_string)
                .collect();
            debug!("Matched labels in {} playlist item(s)", labels.len());
            labels
        };

        debug!("Found {} duration label(s) on the page", labels.len());
        labels
    }

    // An item runs from its boundary match to the element's closing tag, or to
    // the next item when the closing tag cannot be found first.
    fn item_ranges(&self, document: &str) -> Vec<Range<usize>> {
        let Some(boundary) = &self.item_boundary else {
            return Vec::new();
        };

        let starts: Vec<(usize, Option<String>)> = boundary
            .find_iter(document)
            .map(|m| (m.start(), closing_tag(m.as_str())))
            .collect();
        starts
            .iter()
            .enumerate()
            .map(|(index, (start, close))| {
                let limit = starts
                    .get(index + 1)
                    .map_or(document.len(), |(next, _)| *next);
                let end = close
                    .as_deref()
                    .and_then(|tag| document[*start..limit].find(tag))
                    .map_or(limit, |offset| start + offset);
                *start..end
            })
            .collect()
    }

    // First rule wins within one item.
    fn first_label<'t>(&self, item: &'t str) -> Option<&'t str> {
        self.rules.iter().find_map(|rule| rule.first_label(item))
    }

    fn labels_in_document(&self, document: &str) -> Vec<String> {
        let mut by_position: BTreeMap<usize, &str> = BTreeMap::new();
        for rule in &self.rules {
            for (position, label) in rule.labels(document) {
                by_position.entry(position).or_insert(label);
            }
        }
        by_position.into_values().map(str::to_string).collect()
    }
}

/// `</name` for a boundary that matched an opening tag `<name ...`.
fn closing_tag(opening: &str) -> Option<String> {
    let name: String = opening
        .strip_prefix('<')?
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    (!name.is_empty()).then(|| format!("</{name}"))
}
