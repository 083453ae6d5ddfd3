use crate::models::Citation;
use crate::parsing::blocks::ContentBlock;
use crate::parsing::inline::InlineSpan;

/// Renders blocks as a plain-text outline, one blank line between blocks.
///
/// ```text
/// ## [TPU] TPU Highlights
///
/// ### Acme Corp
///   Uses it for **search**.
///   sources:
///   - Acme Corp case study <https://acme.example/blog>
///
/// | A | B |
/// | 1 | 2 |
/// ```
pub fn render(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(block: &ContentBlock) -> String {
    let mut out = String::new();
    match block {
        ContentBlock::SectionHeading { title, category } => {
            out.push_str(&format!("## [{category}] {title}\n"));
        }
        ContentBlock::CaseCard {
            title,
            paragraphs,
            sources,
        } => {
            out.push_str(&format!("### {title}\n"));
            for p in paragraphs {
                out.push_str(&format!("  {}\n", spans(p)));
            }
            out.push_str("  sources:\n");
            for source in sources {
                out.push_str(&format!("  - {}\n", citation(source)));
            }
        }
        ContentBlock::Table { header, rows } => {
            out.push_str(&row(header));
            for r in rows {
                out.push_str(&row(r));
            }
        }
        ContentBlock::IntroParagraph { content } => {
            out.push_str(&spans(content));
            out.push('\n');
        }
    }
    out
}

fn spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|s| {
            if s.emphasized {
                format!("**{}**", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}

fn row(cells: &[Vec<InlineSpan>]) -> String {
    let cells: Vec<String> = cells.iter().map(|c| spans(c)).collect();
    format!("| {} |\n", cells.join(" | "))
}

fn citation(c: &Citation) -> String {
    if c.display_title == c.address {
        format!("<{}>", c.address)
    } else {
        format!("{} <{}>", c.display_title, c.address)
    }
}
