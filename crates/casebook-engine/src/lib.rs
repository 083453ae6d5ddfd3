pub mod citations;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use citations::{KeywordMatcher, MAX_SOURCES, SourceMatcher};
pub use models::{Citation, CitationRecord, ModelError, RawDocument};
pub use parsing::{
    ParsedDoc,
    blocks::{Category, ContentBlock},
    inline::{InlineSpan, InlineSpans, resolve},
    options::ParseOptions,
    parse_document, parse_document_with, parse_with_matcher,
};
