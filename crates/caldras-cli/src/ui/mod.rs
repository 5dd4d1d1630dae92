//! UI primitives for the Caldras CLI.
//!
//! This module provides:
//! - **Context**: Terminal detection and output mode (json, plain, pretty)
//! - **Theme**: Badge tokens and owo-colors styling, including rendered markdown runs
//! - **Render**: Tables, headers, receipts, hints, note frames
//! - **Format**: String utilities (truncate, previews, dates)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, Badge};
//! use crate::ui::render::{header, simple_table, hint};
//!
//! let ctx = app.ui_context(args.json)?;
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ctx, "list", None));
//! println!("{}", simple_table(&ctx, &columns, &rows));
//! println!("{}", hint(&ctx, "caldras show <n>"));
//! ```

mod context;
pub mod format;
pub mod render;
pub mod theme;

pub use context::{OutputMode, Terminal, UiContext};
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, kv, paint_runs, print, print_error, receipt, simple_table,
    Column,
};

pub use format::{format_datetime, preview, truncate};
