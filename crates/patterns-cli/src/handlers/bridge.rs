//! Logger bridge handler

use anyhow::Result;
use patterns_core::SharedConsole;
use patterns_structural::bridge::{
    ConsoleLogWriter, DatabaseLogWriter, ErrorLogger, FileLogWriter, InfoLogger, Logger,
};

/// Log an error to the console writer and an info message to the file and
/// database writers
pub fn handle_bridge(console: &SharedConsole, error: &str, info: &str) -> Result<()> {
    let loggers: Vec<Box<dyn Logger>> = vec![
        Box::new(ErrorLogger::new(ConsoleLogWriter::new(console.clone()))),
        Box::new(InfoLogger::new(FileLogWriter::new(console.clone()))),
        Box::new(InfoLogger::new(DatabaseLogWriter::new(console.clone()))),
    ];

    loggers[0].log(error);
    for logger in &loggers[1..] {
        logger.log(info);
    }
    Ok(())
}
