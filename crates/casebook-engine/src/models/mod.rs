pub mod citation;
pub mod document;

pub use citation::{Citation, CitationRecord};
pub use document::{ModelError, RawDocument};
