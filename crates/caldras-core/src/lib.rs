//! # Caldras Core
//!
//! Core library for Caldras - a small note vault with per-note password
//! protection and a terminal-oriented markdown renderer.
//!
//! This crate holds the domain logic independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: Password key derivation and the authenticated note cipher
//! - **vault**: Note records, the in-memory vault, and its persisted blob
//! - **render**: Line classifier and inline span tokenizer producing styled runs
//! - **error**: The core error taxonomy

pub mod crypto;
pub mod error;
pub mod render;
pub mod vault;

pub use error::{CaldrasError, Result};
pub use render::{render, Style, StyleTag, StyledRun, Theme};
pub use vault::{LoadStatus, Note, NoteSummary, SearchHit, SearchScope, Vault};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
