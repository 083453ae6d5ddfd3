pub mod blocks;
pub mod inline;
pub mod lines;
pub mod options;

#[cfg(test)]
mod tests;

use log::trace;
use serde::Serialize;

use crate::citations::{KeywordMatcher, SourceMatcher};
use crate::models::RawDocument;

use blocks::{BlockBuilder, ContentBlock, LineClassifier};
use lines::lines;
use options::ParseOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub blocks: Vec<ContentBlock>,
}

/// Parses a document with the default options.
pub fn parse_document(doc: &RawDocument) -> ParsedDoc {
    parse_document_with(doc, &ParseOptions::default())
}

pub fn parse_document_with(doc: &RawDocument, options: &ParseOptions) -> ParsedDoc {
    let classifier = LineClassifier::new(&options.footer_keywords);
    let matcher = KeywordMatcher::new(options.max_sources);
    parse_with_matcher(doc, &classifier, &matcher)
}

/// Runs the pipeline with a caller-supplied matching strategy.
///
/// Pure: the same document always yields the same blocks.
pub fn parse_with_matcher(
    doc: &RawDocument,
    classifier: &LineClassifier,
    matcher: &dyn SourceMatcher,
) -> ParsedDoc {
    let mut builder = BlockBuilder::new(&doc.citations, matcher);

    for line in lines(&doc.content) {
        let kind = classifier.classify(line.text);
        trace!("line {}: {kind:?}", line.index);
        builder.push(kind);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}
