//! Host logger.
//!
//! Writes log records to stderr so the interactive dashboard on stdout
//! stays clean. The maximum level comes from the `CARSHIELD_LOG`
//! environment variable (`off`, `error`, `warn`, `info`, `debug`,
//! `trace`), defaulting to `info`.

use std::io::Write as _;
use std::time::Instant;

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub fn init() -> Result<(), SetLoggerError> {
    let level = parse_level(std::env::var("CARSHIELD_LOG").ok().as_deref());
    log::set_boxed_logger(Box::new(Logger {
        start: Instant::now(),
    }))
    .map(|()| log::set_max_level(level))
}

fn parse_level(var: Option<&str>) -> LevelFilter {
    var.and_then(|v| v.parse().ok()).unwrap_or(LevelFilter::Info)
}

struct Logger {
    start: Instant,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Own records at any level; dependencies only when they complain.
        metadata.target().starts_with("carshield") || metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let uptime = self.start.elapsed().as_secs_f64();
        let mut err = std::io::stderr().lock();
        let _ = writeln!(
            err,
            "[{uptime:>9.3}] {:<5} {}",
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {}
}
