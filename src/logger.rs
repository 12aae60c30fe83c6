use crate::attr::Attr;
use crate::callsite;
use crate::config::HandlerConfig;
use crate::extra::ExtraFields;
use crate::handler::Handler;
use crate::level::Level;
use crate::noop_sink::NoopSink;
use crate::record::LogRecord;

/// Leveled front end over a [`Handler`].
///
/// Logging never fails from the caller's point of view: records that cannot
/// be rendered or written are dropped. Use [`Handler::handle`] directly when
/// the failure matters.
#[derive(Clone, Debug)]
pub struct Logger {
    handler: Handler,
}

impl Logger {
    pub fn new(handler: Handler) -> Self {
        Logger { handler }
    }

    /// A logger that renders nothing anywhere. Useful in tests.
    pub fn discard() -> Self {
        Logger::new(Handler::new(
            NoopSink,
            HandlerConfig::default(),
            ExtraFields::new(),
        ))
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Log `message` at `level` with `attrs`.
    ///
    /// `function` names the calling code and is reported in the source
    /// location; the logging macros pass the path of the function they
    /// expand in. The file and line are those of the nearest caller that is
    /// not itself `#[track_caller]`.
    #[track_caller]
    pub fn log_from(
        &self,
        function: &'static str,
        level: Level,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) {
        if !self.handler.enabled(level) {
            return;
        }
        let callsite = callsite::resolve_for(level, self.handler.source_levels(), function);
        let record = LogRecord::new(level, message)
            .with_callsite(callsite)
            .with_attrs(attrs);
        let _ = self.handler.handle(&record);
    }

    /// Hand a pre-built record to the handler if its level is enabled.
    pub fn log_record(&self, record: &LogRecord) {
        if self.handler.enabled(record.level) {
            let _ = self.handler.handle(record);
        }
    }

    /// Logger whose records also carry `attrs`.
    pub fn with(&self, attrs: impl IntoIterator<Item = Attr>) -> Logger {
        Logger::new(self.handler.with_attrs(attrs))
    }

    pub fn with_group(&self, name: impl Into<String>) -> Logger {
        Logger::new(self.handler.with_group(name))
    }
}

impl From<Handler> for Logger {
    fn from(handler: Handler) -> Self {
        Logger::new(handler)
    }
}
