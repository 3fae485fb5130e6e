#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error` … `trace`).
pub const LOG_ENV: &str = "SEABATTLE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr(), "{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging to stderr so it stays out of the board output.
///
/// The level comes from `SEABATTLE_LOG`; without it the level is `debug`
/// when `verbose` is set and `warn` otherwise.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(fallback);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
