//! Markdown to styled runs.
//!
//! A single pass over the text, line by line. Supported syntax: headings
//! (levels 1-3), block quotes, bulleted and numbered items, fenced code
//! blocks, and inline code, bold, italic and bold+italic spans. Anything else
//! is rendered as plain text; rendering never fails.
//!
//! Concatenating the run texts gives the displayed text: markers are
//! stripped, list markers become bullets, and quote markers become a glyph.
//! Emphasis never spans lines.

pub mod block;
pub mod inline;
pub mod style;
pub mod theme;

pub use block::{render, Fence, LineKind, Renderer};
pub use inline::tokenize;
pub use style::{Style, StyleTag, StyledRun};
pub use theme::{Attributes, Rgb, SymbolPair, Theme, ThemeName};
