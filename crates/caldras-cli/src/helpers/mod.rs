//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Password prompting, confirmations and note body reading (`input`)
//! - Note number resolution (`parsing`)

mod input;
mod parsing;

pub use input::{confirm, prompt_new_password, prompt_note_password, read_note_text};
pub use parsing::resolve_note_index;
