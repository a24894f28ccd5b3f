#![cfg(feature = "std")]

use std::env;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

/// Writes records to stderr so they never interleave with the boards on
/// stdout.
struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Level named by `value`, or `info` when it is missing or unknown.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the console logger at the level from `SEA_BATTLE_LOG`.
///
/// Returns the level in effect. Calling it again keeps the first logger.
pub fn init_logging() -> LevelFilter {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_boxed_logger(Box::new(ConsoleLogger { level })).is_ok() {
        log::set_max_level(level);
    }
    log::max_level()
}
