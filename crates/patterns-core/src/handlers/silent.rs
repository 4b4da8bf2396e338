//! Silent console handler for benchmarks and tests that ignore output

use crate::effects::ConsoleEffects;

/// Silent console handler that discards all output
#[derive(Debug, Clone, Copy)]
pub struct SilentConsoleHandler;

impl SilentConsoleHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SilentConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleEffects for SilentConsoleHandler {
    fn print_line(&self, _line: &str) {
        // Silent - do nothing
    }
}
