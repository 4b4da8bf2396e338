//! Patterns CLI library
//!
//! Command handlers live here so they can be exercised with a recording
//! console; `main.rs` only parses arguments and wires up stdout.

/// Command handlers for CLI operations
pub mod handlers;
