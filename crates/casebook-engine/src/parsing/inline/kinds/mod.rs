//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Address`**: URL-like tokens (`https?://` up to the next whitespace), stripped from display text
//! - **`Emphasis`**: `DELIM = "**"`, a matched pair marks an emphasized fragment
//!
//! The parser calls these; it never hardcodes `**` or the address pattern.

pub mod address;
pub mod emphasis;

pub use address::Address;
pub use emphasis::Emphasis;
