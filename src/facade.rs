//! `log` crate backend. `error!` and `warn!` print as `WARNING`, the rest as
//! `INFO`; nothing here is fatal.

use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::{Logger, Severity};

pub const LEVEL_ENV: &str = "TAGLOG_LEVEL";

pub struct TaggedLog;

static TAGGED_LOG: TaggedLog = TaggedLog;

pub fn severity_for(level: Level) -> Severity {
    match level {
        Level::Error | Level::Warn => Severity::Warning,
        Level::Info | Level::Debug | Level::Trace => Severity::Info,
    }
}

pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn level_from_env() -> LevelFilter {
    parse_level(std::env::var(LEVEL_ENV).ok().as_deref())
}

impl Log for TaggedLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            Logger::new(severity_for(record.level())).append(record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&TAGGED_LOG)?;
    log::set_max_level(level);
    Ok(())
}
