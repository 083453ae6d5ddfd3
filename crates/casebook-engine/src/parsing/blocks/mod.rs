//! # Block Parsing
//!
//! Two-phase block parsing over trimmed lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineKind`
//!    (separator, section marker, entity header, table row, table separator,
//!    plain text, blank) from local facts only
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one
//!    open case or table and emits `ContentBlock`s as they close
//!
//! ## Modules
//!
//! - **`types`**: output types (`ContentBlock`, `Category`)
//! - **`kinds`**: line-shape owners (`Heading`, `Separator`, `TableRow`, `CitationFooter`)
//! - **`classify`**: `LineClassifier` produces a `LineKind` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - A case card always carries between one and three sources
//! - Every emitted table has a header and at least one row
//! - Separator lines never influence the output

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClassifier, LineKind};
pub use types::{Category, ContentBlock};
