//! End-to-end tests for the parsing module.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Citation, CitationRecord, RawDocument};
use crate::parsing::{
    ParsedDoc,
    blocks::{Category, ContentBlock},
    inline::InlineSpan,
    options::ParseOptions,
    parse_document, parse_document_with,
};

fn parse(content: &str, citations: Vec<CitationRecord>) -> ParsedDoc {
    let doc = parse_document(&RawDocument::new(content, citations));
    invariants::check(&doc.blocks);
    doc
}

fn acme_citations() -> Vec<CitationRecord> {
    vec![CitationRecord::new(
        "https://acme.example/blog",
        Some("Acme Corp case study"),
    )]
}

#[test]
fn single_case_with_matching_citation() {
    let doc = parse("### Acme Corp\nUses it for search.\n", acme_citations());
    assert_eq!(
        doc.blocks,
        vec![ContentBlock::CaseCard {
            title: "Acme Corp".into(),
            paragraphs: vec![vec![InlineSpan::plain("Uses it for search.")]],
            sources: vec![Citation {
                address: "https://acme.example/blog".into(),
                display_title: "Acme Corp case study".into(),
            }],
        }]
    );
}

#[test]
fn case_without_citations_is_dropped() {
    let doc = parse("### Acme Corp\nUses it for search.\n", vec![]);
    assert!(doc.blocks.is_empty());
}

#[rstest]
#[case::address_only_body("### Acme Corp\nhttps://acme.example/blog\n")]
#[case::followed_by_next_header("### Acme Corp\n### Globex\nbody\n")]
#[case::header_at_eof("### Acme Corp")]
fn cited_case_without_body_keeps_its_card(#[case] content: &str) {
    let doc = parse(content, acme_citations());
    assert_eq!(
        doc.blocks,
        vec![ContentBlock::CaseCard {
            title: "Acme Corp".into(),
            paragraphs: vec![],
            sources: vec![Citation {
                address: "https://acme.example/blog".into(),
                display_title: "Acme Corp case study".into(),
            }],
        }]
    );
}

#[test]
fn unmatched_case_leaves_no_trace_among_others() {
    let content = "\
### Acme Corp
Matched.
### Globex
Long story.
More story.
### Acme Labs
Also matched.
";
    let doc = parse(content, acme_citations());
    let titles: Vec<_> = doc
        .blocks
        .iter()
        .filter_map(|b| match b {
            ContentBlock::CaseCard { title, .. } => Some(title.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(titles, vec!["Acme Corp", "Acme Labs"]);
}

#[test]
fn tpu_section_heading() {
    let doc = parse("## TPU Highlights\n", vec![]);
    assert_eq!(
        doc.blocks,
        vec![ContentBlock::SectionHeading {
            title: "TPU Highlights".into(),
            category: Category::Tpu,
        }]
    );
}

#[test]
fn uncategorised_section_is_silent() {
    let doc = parse("## Summary\n", vec![]);
    assert!(doc.blocks.is_empty());
}

#[test]
fn simple_table() {
    let doc = parse("A|B\n--|--\n1|2\n3|4\n", vec![]);
    let cell = |s: &str| vec![InlineSpan::plain(s)];
    assert_eq!(
        doc.blocks,
        vec![ContentBlock::Table {
            header: vec![cell("A"), cell("B")],
            rows: vec![vec![cell("1"), cell("2")], vec![cell("3"), cell("4")]],
        }]
    );
}

#[test]
fn single_row_table_is_dropped() {
    let doc = parse("| A | B |\n|---|---|\n", vec![]);
    assert!(doc.blocks.is_empty());
}

#[test]
fn ragged_rows_pass_through() {
    let doc = parse("| A | B |\n| 1 |\n| 2 | 3 | 4 |\n", vec![]);
    let ContentBlock::Table { header, rows } = &doc.blocks[0] else {
        panic!("expected Table, got {:?}", doc.blocks);
    };
    assert_eq!(header.len(), 2);
    assert_eq!(rows[0].len(), 1);
    assert_eq!(rows[1].len(), 3);
}

#[test]
fn intro_paragraph_with_emphasis_and_address() {
    let doc = parse("**A** and B http://x.test\n", vec![]);
    assert_eq!(
        doc.blocks,
        vec![ContentBlock::IntroParagraph {
            content: vec![InlineSpan::emphasized("A"), InlineSpan::plain(" and B ")],
        }]
    );
}

#[test]
fn footer_lines_inside_case_are_suppressed() {
    let content = "\
### Acme Corp
Uses it for search.
Source: https://acme.example/blog
https://acme.example/other
";
    let doc = parse(content, acme_citations());
    let ContentBlock::CaseCard { paragraphs, .. } = &doc.blocks[0] else {
        panic!("expected CaseCard");
    };
    assert_eq!(paragraphs.len(), 1);
}

#[test]
fn separator_lines_are_transparent() {
    let base = "## GPU\n### Acme Corp\nline one\nline two\nA|B\n1|2\nIntro\n";
    let with_separators =
        "---\n## GPU\n-----\n### Acme Corp\nline one\n---\nline two\n---\nA|B\n1|2\n---\nIntro\n---\n";
    assert_eq!(
        parse(base, acme_citations()),
        parse(with_separators, acme_citations())
    );
}

#[test]
fn parsing_is_idempotent() {
    let content = "## TPU\nintro\n### Acme Corp\n**Big** win\n| a | b |\n|---|---|\n";
    let doc = RawDocument::new(content, acme_citations());
    assert_eq!(parse_document(&doc), parse_document(&doc));
}

#[test]
fn empty_and_garbage_input() {
    assert!(parse("", vec![]).blocks.is_empty());
    assert!(parse("\n\n   \n---\n", vec![]).blocks.is_empty());
    assert!(parse("https://only.example\n|\n", vec![]).blocks.is_empty());
}

#[test]
fn section_closes_open_table() {
    let doc = parse("A|B\n1|2\n## GPU adopters\n", vec![]);
    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(doc.blocks[0], ContentBlock::Table { .. }));
    assert!(matches!(
        doc.blocks[1],
        ContentBlock::SectionHeading {
            category: Category::Gpu,
            ..
        }
    ));
}

#[test]
fn options_limit_sources() {
    let citations = vec![
        CitationRecord::new("https://acme.example/1", None),
        CitationRecord::new("https://acme.example/2", None),
    ];
    let options = ParseOptions {
        max_sources: 1,
        ..ParseOptions::default()
    };
    let doc = parse_document_with(&RawDocument::new("### Acme\nbody\n", citations), &options);
    let ContentBlock::CaseCard { sources, .. } = &doc.blocks[0] else {
        panic!("expected CaseCard");
    };
    assert_eq!(sources.len(), 1);
}
