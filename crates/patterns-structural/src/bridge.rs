//! Logger / log writer bridge
//!
//! Severity (what kind of message) and destination (where it goes) vary
//! independently: any [`Logger`] can be paired with any [`LogWriter`].

use patterns_core::SharedConsole;

/// Implementation side: where a formatted message ends up
pub trait LogWriter: Send + Sync {
    fn write(&self, message: &str);
}

/// Abstraction side: how a message is formatted before writing
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

impl<W: LogWriter + ?Sized> LogWriter for Box<W> {
    fn write(&self, message: &str) {
        (**self).write(message);
    }
}

macro_rules! prefixed_writer {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        pub struct $name {
            console: SharedConsole,
        }

        impl $name {
            pub fn new(console: SharedConsole) -> Self {
                Self { console }
            }
        }

        impl LogWriter for $name {
            fn write(&self, message: &str) {
                self.console.print_line(&format!(concat!($prefix, " {}"), message));
            }
        }
    };
}

prefixed_writer!(
    /// Writes to the terminal
    ConsoleLogWriter,
    "[Console]"
);
prefixed_writer!(
    /// Pretends to append to a log file
    FileLogWriter,
    "[File]"
);
prefixed_writer!(
    /// Pretends to insert into a log table
    DatabaseLogWriter,
    "[Database]"
);

/// Logs with an `[ERROR]` tag
pub struct ErrorLogger<W> {
    writer: W,
}

impl<W: LogWriter> ErrorLogger<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: LogWriter> Logger for ErrorLogger<W> {
    fn log(&self, message: &str) {
        self.writer.write(&format!("[ERROR]: {message}"));
    }
}

/// Logs with an `[INFO]` tag
pub struct InfoLogger<W> {
    writer: W,
}

impl<W: LogWriter> InfoLogger<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: LogWriter> Logger for InfoLogger<W> {
    fn log(&self, message: &str) {
        self.writer.write(&format!("[INFO]: {message}"));
    }
}
