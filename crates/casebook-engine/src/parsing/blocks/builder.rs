use log::debug;

use crate::citations::{MAX_SOURCES, SourceMatcher};
use crate::models::CitationRecord;
use crate::parsing::inline::{InlineSpan, InlineSpans, resolve};

use super::{
    classify::LineKind,
    kinds::Heading,
    types::{Category, ContentBlock},
};

/// Tables need a header plus at least one data row.
const MIN_TABLE_ROWS: usize = 2;

#[derive(Debug)]
struct PendingEntity {
    title: String,
    body: Vec<String>,
}

#[derive(Debug)]
enum BufferedRow {
    Cells(Vec<String>),
    Separator,
}

#[derive(Debug)]
struct PendingTable {
    rows: Vec<BufferedRow>,
}

#[derive(Debug)]
enum State {
    Idle,
    Entity(PendingEntity),
    Table(PendingTable),
}

/// Groups classified lines into [`ContentBlock`]s.
///
/// At most one case or one table is open at a time. Table rows that arrive
/// while a case is open become part of the case body.
pub struct BlockBuilder<'a> {
    citations: &'a [CitationRecord],
    matcher: &'a dyn SourceMatcher,
    state: State,
    out: Vec<ContentBlock>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(citations: &'a [CitationRecord], matcher: &'a dyn SourceMatcher) -> Self {
        Self {
            citations,
            matcher,
            state: State::Idle,
            out: vec![],
        }
    }

    pub fn push(&mut self, kind: LineKind<'_>) {
        match kind {
            LineKind::Separator => {}
            LineKind::SectionMarker { title } => {
                self.flush();
                match Category::from_title(title) {
                    Some(category) => self.out.push(ContentBlock::SectionHeading {
                        title: title.to_string(),
                        category,
                    }),
                    None => debug!("ignoring section without a category: {title:?}"),
                }
            }
            LineKind::EntityHeader { title } => {
                self.flush();
                self.state = State::Entity(PendingEntity {
                    title: title.to_string(),
                    body: vec![],
                });
            }
            LineKind::TableRow { cells } => match &mut self.state {
                State::Entity(entity) => entity.body.push(cells.join(" | ")),
                State::Table(table) => table.rows.push(owned_row(&cells)),
                State::Idle => {
                    self.state = State::Table(PendingTable {
                        rows: vec![owned_row(&cells)],
                    })
                }
            },
            LineKind::TableSeparatorRow => match &mut self.state {
                // Alignment rows inside a case body are never rendered.
                State::Entity(_) => {}
                State::Table(table) => table.rows.push(BufferedRow::Separator),
                State::Idle => {
                    self.state = State::Table(PendingTable {
                        rows: vec![BufferedRow::Separator],
                    })
                }
            },
            LineKind::Blank => {
                if matches!(self.state, State::Table(_)) {
                    self.flush();
                }
            }
            LineKind::Plain { text } => {
                if matches!(self.state, State::Table(_)) {
                    self.flush();
                }
                match &mut self.state {
                    State::Entity(entity) => entity.body.push(text.to_string()),
                    _ => self.push_intro(text),
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => {}
            State::Entity(entity) => self.flush_entity(entity),
            State::Table(table) => self.flush_table(table),
        }
    }

    fn flush_entity(&mut self, entity: PendingEntity) {
        let mut sources = self.matcher.select(&entity.title, self.citations);
        if sources.is_empty() {
            debug!("dropping case {:?}: no matching citation", entity.title);
            return;
        }
        sources.truncate(MAX_SOURCES);

        // A cited case is kept even when nothing displayable follows its header.
        let paragraphs = entity
            .body
            .iter()
            .map(|line| resolve(line))
            .filter(|spans| !spans.is_empty())
            .collect();

        self.out.push(ContentBlock::CaseCard {
            title: entity.title,
            paragraphs,
            sources,
        });
    }

    fn flush_table(&mut self, table: PendingTable) {
        let data: Vec<Vec<String>> = table
            .rows
            .into_iter()
            .filter_map(|row| match row {
                BufferedRow::Cells(cells) => Some(cells),
                BufferedRow::Separator => None,
            })
            .collect();

        if data.len() < MIN_TABLE_ROWS {
            debug!("dropping table with {} data row(s)", data.len());
            return;
        }
        let Some((head, body)) = data.split_first() else {
            return;
        };

        let header = head.iter().map(|cell| header_cell(cell)).collect();
        let rows = body
            .iter()
            .map(|row| row.iter().map(|cell| resolve(cell)).collect())
            .collect();

        self.out.push(ContentBlock::Table { header, rows });
    }

    fn push_intro(&mut self, text: &str) {
        // Unrecognised heading levels (`#`, `####`) outside a case are dropped.
        if Heading::looks_like_heading(text) {
            debug!("ignoring stray heading {text:?}");
            return;
        }
        let content = resolve(text);
        if !content.is_empty() {
            self.out.push(ContentBlock::IntroParagraph { content });
        }
    }
}

fn owned_row(cells: &[&str]) -> BufferedRow {
    BufferedRow::Cells(cells.iter().map(|c| c.to_string()).collect())
}

/// Header cells that resolve to nothing fall back to their raw text.
fn header_cell(cell: &str) -> InlineSpans {
    let spans = resolve(cell);
    if spans.is_empty() && !cell.is_empty() {
        vec![InlineSpan::plain(cell)]
    } else {
        spans
    }
}
