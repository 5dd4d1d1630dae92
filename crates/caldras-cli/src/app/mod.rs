//! Application-level utilities for the Caldras CLI.
//!
//! This module provides:
//! - Path resolution for config and vault files
//! - A lazily-loaded application context shared by command handlers

mod context;
mod resolver;

pub use context::AppContext;
