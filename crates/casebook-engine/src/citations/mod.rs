//! # Citation Matching
//!
//! Links a case title to the externally supplied citation records by keyword
//! overlap. A case whose title matches no record is not shown at all: the
//! builder treats an empty selection as a gate, not a missing footnote.

use crate::models::{Citation, CitationRecord};

/// Hard ceiling on sources attached to one case.
pub const MAX_SOURCES: usize = 3;

/// Characters replaced by spaces before a title is tokenised.
pub const BRACKETS: [char; 8] = ['(', ')', '[', ']', '（', '）', '【', '】'];

/// Picks the citations that support a named case.
pub trait SourceMatcher {
    /// Returns the selected citations in original record order.
    ///
    /// An empty result means the case is unsupported and will be dropped.
    fn select(&self, entity_title: &str, records: &[CitationRecord]) -> Vec<Citation>;
}

/// Lowercased title tokens longer than one character.
pub fn keywords(title: &str) -> Vec<String> {
    title
        .replace(BRACKETS, " ")
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(str::to_lowercase)
        .collect()
}

/// Selects records whose title or address contains any title keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordMatcher {
    max_sources: usize,
}

impl KeywordMatcher {
    /// `max_sources` is clamped to `1..=MAX_SOURCES`.
    pub fn new(max_sources: usize) -> Self {
        Self {
            max_sources: max_sources.clamp(1, MAX_SOURCES),
        }
    }

    pub fn max_sources(&self) -> usize {
        self.max_sources
    }

    fn is_relevant(record: &CitationRecord, keywords: &[String]) -> bool {
        if record.address.is_empty() {
            return false;
        }
        let title = record.title.as_deref().unwrap_or_default().to_lowercase();
        let address = record.address.to_lowercase();
        keywords
            .iter()
            .any(|k| title.contains(k.as_str()) || address.contains(k.as_str()))
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(MAX_SOURCES)
    }
}

impl SourceMatcher for KeywordMatcher {
    fn select(&self, entity_title: &str, records: &[CitationRecord]) -> Vec<Citation> {
        let keywords = keywords(entity_title);
        if keywords.is_empty() {
            return vec![];
        }
        records
            .iter()
            .filter(|record| Self::is_relevant(record, &keywords))
            .take(self.max_sources)
            .map(Citation::from)
            .collect()
    }
}
