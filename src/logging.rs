#![cfg(feature = "std")]

//! Stderr backend for the `log` facade used by the engine and controller.
//!
//! Records carry their module target so setup, turn and placement-retry
//! messages can be told apart; stdout is left to the binaries.

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

/// Writes records to stderr so stdout stays free for game output.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger with a level from `BROADSIDE_LOG`.
/// Defaults to `info` if the variable is unset or invalid. Calling it twice
/// is harmless.
pub fn init_logging() {
    let level = env::var("BROADSIDE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
