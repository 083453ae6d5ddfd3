use serde::{Deserialize, Serialize};

use super::CitationRecord;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable pipeline input: the generated text and its candidate citations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(alias = "text")]
    pub content: String,
    #[serde(default, alias = "grounding")]
    pub citations: Vec<CitationRecord>,
}

impl RawDocument {
    pub fn new(content: impl Into<String>, citations: Vec<CitationRecord>) -> Self {
        Self {
            content: content.into(),
            citations,
        }
    }

    /// Parse a `{ "content": ..., "citations": [...] }` document.
    ///
    /// `text` is accepted in place of `content` and `grounding` in place of
    /// `citations`, matching what the generative service hands back.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_reads_content_and_citations() {
        let doc = RawDocument::from_json(
            r####"{"content": "### Acme\nbody", "citations": [{"address": "https://acme.example"}]}"####,
        )
        .unwrap();
        assert_eq!(doc.content, "### Acme\nbody");
        assert_eq!(doc.citations.len(), 1);
    }

    #[test]
    fn from_json_accepts_service_field_names() {
        let doc = RawDocument::from_json(
            r#"{"text": "hello", "grounding": [{"web": {"uri": "https://x.example"}}]}"#,
        )
        .unwrap();
        assert_eq!(doc.content, "hello");
        assert_eq!(doc.citations[0].address, "https://x.example");
    }

    #[test]
    fn from_json_without_citations() {
        let doc = RawDocument::from_json(r#"{"content": ""}"#).unwrap();
        assert!(doc.citations.is_empty());
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            RawDocument::from_json("not json"),
            Err(ModelError::Json(_))
        ));
    }
}
