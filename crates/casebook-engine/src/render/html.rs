use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::blocks::{Category, ContentBlock};
use crate::parsing::inline::InlineSpan;

/// Renders blocks as an HTML fragment.
///
/// Every piece of source text is escaped; only the tags emitted here are markup.
pub fn render(blocks: &[ContentBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        render_block(&mut out, block);
    }
    out
}

fn render_block(out: &mut String, block: &ContentBlock) {
    match block {
        ContentBlock::SectionHeading { title, category } => {
            let class = match category {
                Category::Gpu => "section-gpu",
                Category::Tpu => "section-tpu",
            };
            out.push_str(&format!(
                "<h2 class=\"section {class}\"><span class=\"badge\">{category}</span> {}</h2>\n",
                encode_text(title)
            ));
        }
        ContentBlock::CaseCard {
            title,
            paragraphs,
            sources,
        } => {
            out.push_str("<article class=\"case-card\">\n");
            out.push_str(&format!("<h3>{}</h3>\n", encode_text(title)));
            for p in paragraphs {
                out.push_str(&format!("<p>{}</p>\n", spans(p)));
            }
            out.push_str("<ul class=\"sources\">\n");
            for source in sources {
                out.push_str(&format!(
                    "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>\n",
                    encode_double_quoted_attribute(&source.address),
                    encode_text(&source.display_title)
                ));
            }
            out.push_str("</ul>\n</article>\n");
        }
        ContentBlock::Table { header, rows } => {
            out.push_str("<table>\n<thead>\n<tr>");
            for cell in header {
                out.push_str(&format!("<th>{}</th>", spans(cell)));
            }
            out.push_str("</tr>\n</thead>\n<tbody>\n");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str(&format!("<td>{}</td>", spans(cell)));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</tbody>\n</table>\n");
        }
        ContentBlock::IntroParagraph { content } => {
            out.push_str(&format!("<p class=\"intro\">{}</p>\n", spans(content)));
        }
    }
}

fn spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|s| {
            if s.emphasized {
                format!("<strong>{}</strong>", encode_text(&s.text))
            } else {
                encode_text(&s.text).into_owned()
            }
        })
        .collect()
}
