//! Stdout console handler for demo runs

use crate::effects::ConsoleEffects;

/// Stdout console handler for plain text output
#[derive(Debug, Clone, Copy)]
pub struct StdoutConsoleHandler;

impl StdoutConsoleHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleEffects for StdoutConsoleHandler {
    fn print_line(&self, line: &str) {
        println!("{line}");
    }
}
