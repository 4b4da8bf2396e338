//! Patterns Core - shared foundation for the pattern demos
//!
//! Every demo crate depends on this crate for three things:
//!
//! - `PatternError`: the single error type surfaced by all demos
//! - `ConsoleEffects`: the output seam demo components print through, with
//!   stdout, silent and recording handlers
//! - `PatternsConfig`: TOML/JSON configuration merged with `PATTERNS_*`
//!   environment overrides

#![forbid(unsafe_code)]

/// Unified error handling
pub mod errors;

/// Console effect interface
pub mod effects;

/// Console effect handlers
pub mod handlers;

/// Demo configuration loading and validation
pub mod config;

pub use config::{
    AdapterConfig, ChainConfig, CompositeConfig, PatternsConfig, ProxyConfig, RoleDefinition,
    UnhandledPolicy,
};
pub use effects::{ConsoleEffects, SharedConsole};
pub use errors::{PatternError, Result};
pub use handlers::{RecordingConsoleHandler, SilentConsoleHandler, StdoutConsoleHandler};
