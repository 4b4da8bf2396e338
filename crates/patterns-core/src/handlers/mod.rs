//! Console effect handlers

pub mod recording;
pub mod silent;
pub mod stdout;

pub use recording::RecordingConsoleHandler;
pub use silent::SilentConsoleHandler;
pub use stdout::StdoutConsoleHandler;
