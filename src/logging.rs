// `log` backend that forwards to the host's debug-string facility.

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::{ArbiterError, Result};

pub struct HostLogger<F> {
    prefix: &'static str,
    level: LevelFilter,
    sink: F,
}

impl<F> HostLogger<F>
where
    F: Fn(&str) + Send + Sync,
{
    pub fn new(prefix: &'static str, level: LevelFilter, sink: F) -> Self {
        HostLogger {
            prefix,
            level,
            sink,
        }
    }
}

impl<F> Log for HostLogger<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // The host expects newline-terminated lines.
        (self.sink)(&format!("{}: {}\n", self.prefix, record.args()));
    }

    fn flush(&self) {}
}

/// Install the host logger as the global `log` backend. Only the first call wins.
pub fn init<F>(prefix: &'static str, level: LevelFilter, sink: F) -> Result<()>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    log::set_boxed_logger(Box::new(HostLogger::new(prefix, level, sink)))
        .map_err(|_| ArbiterError::LoggerInstalled)?;
    log::set_max_level(level);
    Ok(())
}
