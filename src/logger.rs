use colored::Colorize;
use log::{Level, LevelFilter, Log};

pub static LOGGER: Logger = Logger;

/// Writes log records to stderr with a colored level prefix. Filtering is left to
/// [`log::set_max_level`].
pub struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}{}", format_level(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs [`LOGGER`]. `verbose` lowers the threshold from info to debug.
pub fn init(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn format_level(level: Level) -> String {
    match level {
        Level::Error => "❌ Error: ".bold().red().to_string(),
        Level::Warn => "⚠️  Warning: ".yellow().to_string(),
        Level::Info => String::new(),
        Level::Debug => "DEBUG: ".blue().to_string(),
        Level::Trace => "TRACE: ".purple().to_string(),
    }
}
