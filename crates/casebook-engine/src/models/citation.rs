use serde::{Deserialize, Serialize};

/// A candidate web reference supplied alongside the generated text.
///
/// Records arrive independently of the text. Deserialises from either the flat
/// `{ "address", "title" }` shape or the grounding-chunk shape
/// `{ "web": { "uri", "title" } }` returned by the generative service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordRepr")]
pub struct CitationRecord {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CitationRecord {
    pub fn new(address: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            address: address.into(),
            title: title.map(str::to_string),
        }
    }

    /// Title used for display: the record title if it has any text, else the address.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => &self.address,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordRepr {
    Flat {
        address: String,
        #[serde(default)]
        title: Option<String>,
    },
    Grounding {
        #[serde(default)]
        web: Option<WebChunk>,
    },
}

#[derive(Deserialize)]
struct WebChunk {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl From<RecordRepr> for CitationRecord {
    fn from(repr: RecordRepr) -> Self {
        match repr {
            RecordRepr::Flat { address, title } => Self { address, title },
            // A chunk without a uri keeps an empty address and is never selected.
            RecordRepr::Grounding { web } => {
                let web = web.unwrap_or(WebChunk {
                    uri: None,
                    title: None,
                });
                Self {
                    address: web.uri.unwrap_or_default(),
                    title: web.title,
                }
            }
        }
    }
}

/// A citation accepted for a case card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub address: String,
    pub display_title: String,
}

impl From<&CitationRecord> for Citation {
    fn from(record: &CitationRecord) -> Self {
        Self {
            address: record.address.clone(),
            display_title: record.display_title().to_string(),
        }
    }
}
