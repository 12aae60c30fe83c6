use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Importance of a log record on an ordered numeric scale.
///
/// The four named levels sit at fixed points with gaps between them so that
/// custom levels can be placed anywhere on the scale, e.g. `Level(2)` sits
/// between info and warn and renders as `INFO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(pub i32);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);

    /// Parse a level name. Names are matched exactly; anything else,
    /// including `"INFO"` or `" warn"`, selects [`Level::DEBUG`].
    pub fn parse(name: &str) -> Level {
        match name {
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::DEBUG,
        }
    }

    /// Output-facing severity for this level.
    ///
    /// Mapping is by cutoff, not equality: anything at or above `ERROR`
    /// renders as `ERROR`, anything below `INFO` as `DEBUG`.
    pub fn severity(self) -> Severity {
        if self >= Level::ERROR {
            Severity::Error
        } else if self >= Level::WARN {
            Severity::Warning
        } else if self >= Level::INFO {
            Severity::Info
        } else {
            Severity::Debug
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl FromStr for Level {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Level::parse(s))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = match *self {
            Level::DEBUG => "DEBUG",
            Level::INFO => "INFO",
            Level::WARN => "WARN",
            Level::ERROR => "ERROR",
            Level(n) => return write!(f, "LEVEL({})", n),
        };
        f.write_str(base)
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Level(-8),
            tracing::Level::DEBUG => Level::DEBUG,
            tracing::Level::INFO => Level::INFO,
            tracing::Level::WARN => Level::WARN,
            _ => Level::ERROR,
        }
    }
}

/// Severity label understood by the log ingestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
