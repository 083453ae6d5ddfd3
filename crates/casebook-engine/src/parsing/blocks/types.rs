use std::fmt;

use serde::Serialize;

use crate::models::Citation;
use crate::parsing::inline::InlineSpans;

/// The processor family a section heading groups its cases under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Gpu,
    Tpu,
}

impl Category {
    /// Derives a category from a section title. `tpu` wins over `gpu`.
    pub fn from_title(title: &str) -> Option<Self> {
        let lower = title.to_lowercase();
        if lower.contains("tpu") {
            Some(Category::Tpu)
        } else if lower.contains("gpu") {
            Some(Category::Gpu)
        } else {
            None
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Gpu => f.write_str("GPU"),
            Category::Tpu => f.write_str("TPU"),
        }
    }
}

/// A finished, render-ready output unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    SectionHeading {
        title: String,
        category: Category,
    },
    /// A named case with at least one matched source.
    CaseCard {
        title: String,
        paragraphs: Vec<InlineSpans>,
        sources: Vec<Citation>,
    },
    /// Rows may be narrower or wider than the header; they are not repaired.
    Table {
        header: Vec<InlineSpans>,
        rows: Vec<Vec<InlineSpans>>,
    },
    IntroParagraph {
        content: InlineSpans,
    },
}
