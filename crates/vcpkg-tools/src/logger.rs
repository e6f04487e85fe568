//! Stderr logger for the front ends.
//!
//! Implements `log::Log` and prints `[level] message` lines, the same tags the
//! build tasks have always printed by hand.

use anyhow::{anyhow, Result};
use log::{Level, LevelFilter, Metadata, Record};

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", level_tag(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warn",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

/// Initialize the logger.
///
/// # Arguments
/// * `max_level` - The maximum log level to display.
pub fn init(max_level: LevelFilter) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|_| anyhow!("Logger already initialized"))?;
    log::set_max_level(max_level);
    Ok(())
}
