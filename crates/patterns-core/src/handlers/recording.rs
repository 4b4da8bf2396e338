//! Recording console handler for tests
//!
//! Captures every line in write order so tests can assert on the exact
//! sequence a demo produced.

use crate::effects::ConsoleEffects;
use parking_lot::Mutex;

/// Console handler that keeps every printed line in memory
#[derive(Debug, Default)]
pub struct RecordingConsoleHandler {
    lines: Mutex<Vec<String>>,
}

impl RecordingConsoleHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drain recorded lines, leaving the recorder empty
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    /// Number of recorded lines
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// True when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Count lines that start with `prefix`
    pub fn count_prefixed(&self, prefix: &str) -> usize {
        self.lines
            .lock()
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }
}

impl ConsoleEffects for RecordingConsoleHandler {
    fn print_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_write_order() {
        let console = RecordingConsoleHandler::new();
        console.print_line("first");
        console.print_line("second");
        assert_eq!(console.lines(), vec!["first", "second"]);
        assert_eq!(console.count_prefixed("fir"), 1);
    }

    #[test]
    fn take_drains() {
        let console = RecordingConsoleHandler::new();
        console.print_line("line");
        assert_eq!(console.take().len(), 1);
        assert!(console.is_empty());
    }
}
