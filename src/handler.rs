use crate::attr::{normalize, Attr};
use crate::callsite::CallSite;
use crate::config::HandlerConfig;
use crate::error::HandleError;
use crate::extra::ExtraFields;
use crate::level::{Level, Severity};
use crate::record::LogRecord;
use crate::sink::{LogSink, StdoutSink};
use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Key under which Cloud Logging expects the source location object.
pub const SOURCE_LOCATION_KEY: &str = "logging.googleapis.com/sourceLocation";

/// Renders [`LogRecord`]s as Cloud Logging compatible JSON lines.
///
/// A handler is an immutable value. [`Handler::with_attrs`] and
/// [`Handler::with_group`] return new instances that share the sink, threshold
/// and extra fields of their parent, so derived handlers can be cloned and
/// sent across threads freely and never observe each other's attributes.
#[derive(Clone)]
pub struct Handler {
    sink: Arc<dyn LogSink>,
    level: Level,
    source_levels: Arc<[Level]>,
    attrs: Arc<[Attr]>,
    group: Option<Arc<str>>,
    extra: ExtraFields,
}

#[derive(Serialize)]
struct Entry<'a> {
    severity: Severity,
    message: &'a str,
    timestamp: String,
    #[serde(
        rename = "logging.googleapis.com/sourceLocation",
        skip_serializing_if = "Option::is_none"
    )]
    source_location: Option<&'a CallSite>,
    context: Map<String, Value>,
    extra: &'a Map<String, Value>,
}

impl Handler {
    /// Create a handler writing to `sink`.
    ///
    /// **Parameters**
    /// - `sink`: destination for rendered lines.
    /// - `config`: enabled threshold and source-location levels.
    /// - `extra`: store whose contents fill the `extra` section of every
    ///   record, read at write time.
    pub fn new(sink: impl LogSink + 'static, config: HandlerConfig, extra: ExtraFields) -> Self {
        Handler {
            sink: Arc::new(sink),
            level: config.level,
            source_levels: config.source_levels.into(),
            attrs: Arc::from(Vec::new()),
            group: None,
            extra,
        }
    }

    /// Handler writing to stdout with the process-wide extra fields.
    pub fn stdout(config: HandlerConfig) -> Self {
        Handler::new(StdoutSink, config, ExtraFields::global())
    }

    /// Whether records at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Render `record` and write it to the sink as one line.
    ///
    /// Handler attributes come first, then the record's own, so a later
    /// duplicate key overwrites an earlier one. The source location is
    /// included only for configured source levels and only when the record
    /// carries one.
    pub fn handle(&self, record: &LogRecord) -> Result<(), HandleError> {
        let line = self.render(record)?;
        self.sink.write_line(&line)?;
        Ok(())
    }

    fn render(&self, record: &LogRecord) -> Result<Vec<u8>, HandleError> {
        let mut context = Map::new();
        for attr in self.attrs.iter().chain(record.attrs.iter()) {
            context.insert(attr.key.clone(), normalize(&attr.value));
        }

        let source_location = if self.wants_source(record.level) {
            record.callsite.as_ref()
        } else {
            None
        };

        let extra = self.extra.snapshot();
        let entry = Entry {
            severity: record.level.severity(),
            message: &record.message,
            timestamp: record.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            source_location,
            context,
            extra: &extra,
        };

        let mut line = serde_json::to_vec(&entry)?;
        line.push(b'\n');
        Ok(line)
    }

    /// New handler whose records also carry `attrs`, after any attributes
    /// this handler already has.
    pub fn with_attrs(&self, attrs: impl IntoIterator<Item = Attr>) -> Handler {
        let attrs: Arc<[Attr]> = self.attrs.iter().cloned().chain(attrs).collect();
        Handler {
            attrs,
            ..self.clone()
        }
    }

    /// New handler with its group set to `name`.
    ///
    /// The group is tracked but does not yet change how attribute keys are
    /// rendered.
    pub fn with_group(&self, name: impl Into<String>) -> Handler {
        Handler {
            group: Some(Arc::from(name.into())),
            ..self.clone()
        }
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn source_levels(&self) -> &[Level] {
        &self.source_levels
    }

    pub fn wants_source(&self, level: Level) -> bool {
        self.source_levels.contains(&level)
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn extra(&self) -> &ExtraFields {
        &self.extra
    }

    pub fn flush(&self) -> Result<(), HandleError> {
        self.sink.flush()?;
        Ok(())
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("level", &self.level)
            .field("source_levels", &self.source_levels)
            .field("attrs", &self.attrs)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}
