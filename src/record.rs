use crate::attr::{Attr, Value};
use crate::callsite::CallSite;
use crate::level::Level;
use chrono::{DateTime, Utc};

/// A single log event on its way to a [`Handler`](crate::handler::Handler).
///
/// The timestamp is captured when the record is built, not when it is
/// written. Attributes keep call order and are not deduplicated here.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub callsite: Option<CallSite>,
    pub attrs: Vec<Attr>,
}

impl LogRecord {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        LogRecord {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            callsite: None,
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.push(Attr::new(key, value));
        self
    }

    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn with_callsite(mut self, callsite: Option<CallSite>) -> Self {
        self.callsite = callsite;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
