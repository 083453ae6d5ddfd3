//! # Inline Markup
//!
//! Resolves a line of display text into [`InlineSpan`]s.
//!
//! ## Steps
//!
//! 1. Address-looking substrings are removed (see [`kinds::Address`]).
//!    Whitespace-only leftovers resolve to an empty sequence.
//! 2. Matched `**…**` pairs become emphasized fragments, everything else
//!    plain fragments, in source order.
//! 3. Empty fragments are dropped.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and the `InlineSpans` sequence
//! - **`kinds`**: delimiter/pattern owners (`Address`, `Emphasis`)
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`parser`**: `resolve()` entry point and the emphasis scanner

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_emphasis, resolve};
pub use types::{InlineSpan, InlineSpans, plain_text};
