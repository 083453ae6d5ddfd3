use crate::parsing::inline::kinds::Address;

use super::kinds::{CitationFooter, Heading, Separator, TableRow};

/// Classification of a single trimmed line.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Three or more dashes. Never becomes a block.
    Separator,
    /// `## title`. Groups the following cases under a category.
    SectionMarker { title: &'a str },
    /// `### title`. Opens a case.
    EntityHeader { title: &'a str },
    /// A pipe-delimited data row, split into trimmed cells.
    TableRow { cells: Vec<&'a str> },
    /// A `|---|:--|` alignment row.
    TableSeparatorRow,
    Plain { text: &'a str },
    /// Empty, a citation footer, or nothing left once addresses are removed.
    Blank,
}

/// Classifies individual lines for the block parsing phase.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    footer_keywords: Vec<String>,
}

impl LineClassifier {
    pub fn new(footer_keywords: &[String]) -> Self {
        Self {
            footer_keywords: footer_keywords.to_vec(),
        }
    }

    /// Classifies a line into exactly one [`LineKind`].
    ///
    /// Total over all input; the line is trimmed first.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = line.trim();
        if line.is_empty() {
            return LineKind::Blank;
        }
        if Separator::is_match(line) {
            return LineKind::Separator;
        }
        if CitationFooter::is_match(line, &self.footer_keywords)
            || Address::strip(line).trim().is_empty()
        {
            return LineKind::Blank;
        }
        match Heading::parse(line) {
            Some((Heading::SECTION_LEVEL, title)) => return LineKind::SectionMarker { title },
            Some((Heading::ENTITY_LEVEL, title)) => return LineKind::EntityHeader { title },
            _ => {}
        }
        if TableRow::is_data_row(line) {
            return LineKind::TableRow {
                cells: TableRow::cells(line),
            };
        }
        if TableRow::is_separator_row(line) {
            return LineKind::TableSeparatorRow;
        }
        LineKind::Plain { text: line }
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        let keywords: Vec<String> = CitationFooter::DEFAULT_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .collect();
        Self::new(&keywords)
    }
}
