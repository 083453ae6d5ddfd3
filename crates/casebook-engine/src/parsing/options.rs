use serde::{Deserialize, Serialize};

use crate::citations::MAX_SOURCES;
use crate::parsing::blocks::kinds::CitationFooter;

/// Tunables for one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Sources kept per case. Clamped to `1..=3`.
    pub max_sources: usize,
    /// Keywords that mark a line with an address as a citation footer.
    pub footer_keywords: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_sources: MAX_SOURCES,
            footer_keywords: CitationFooter::DEFAULT_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}
