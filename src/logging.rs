#![cfg(feature = "std")]

use std::env;
use log::{self, Level, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Module targets only help when tracing the scan itself.
        if record.level() >= Level::Debug {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        } else {
            eprintln!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger.
///
/// `verbose` forces `debug`, which prints every detected ship and violation.
/// Otherwise the level comes from the `BATTLEFIELD_LOG` environment variable,
/// defaulting to `warn` so a plain run prints nothing but the verdict.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        env::var("BATTLEFIELD_LOG")
            .ok()
            .and_then(|lvl| lvl.parse().ok())
            .unwrap_or(LevelFilter::Warn)
    };
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
