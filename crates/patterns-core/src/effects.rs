//! Console effect interface for demo output
//!
//! Demo components never call `println!` directly. They write whole lines
//! through a `ConsoleEffects` handle, which lets the CLI print to stdout and
//! lets tests record the exact sequence of lines.

use std::sync::Arc;

/// Pure trait for line-oriented console output
pub trait ConsoleEffects: Send + Sync {
    /// Write one line of demo output
    fn print_line(&self, line: &str);
}

/// Shared console handle held by demo components
pub type SharedConsole = Arc<dyn ConsoleEffects>;

impl<T: ConsoleEffects + ?Sized> ConsoleEffects for Arc<T> {
    fn print_line(&self, line: &str) {
        (**self).print_line(line);
    }
}

impl<T: ConsoleEffects + ?Sized> ConsoleEffects for &T {
    fn print_line(&self, line: &str) {
        (**self).print_line(line);
    }
}
