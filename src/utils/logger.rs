//! Colored stderr backend for the `log` facade

use super::display::ColorOutput;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Writes log records to stderr, colored by level
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install a console logger as the global logger
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    /// Level filter for a count of `-v` flags
    pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn format(record: &Record<'_>) -> String {
        let line = format!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        match record.level() {
            Level::Error => ColorOutput::error(&line),
            Level::Warn => ColorOutput::warning(&line),
            Level::Info => ColorOutput::info(&line),
            Level::Debug | Level::Trace => ColorOutput::debug(&line),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}
