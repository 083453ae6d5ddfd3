//! Reference renderers for parsed blocks.
//!
//! Both are pure functions of the block sequence. `text` is a stable outline
//! used by snapshot tests and the CLI; `html` is a self-contained fragment.

pub mod html;
pub mod text;
