use crate::attr::{Attr, Value};
use crate::callsite::CallSite;
use crate::handler::Handler;
use crate::level::Level;
use crate::record::LogRecord;
use tracing::field::{Field, Visit};
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// `tracing_subscriber` layer that renders events through a [`Handler`].
///
/// Events are turned into [`LogRecord`]s on the emitting thread and written
/// synchronously. Fields become attributes in the order they were recorded;
/// the `message` field becomes the record's message. The event's file, line
/// and module path serve as its call-site.
pub struct HandlerLayer {
    handler: Handler,
}

impl HandlerLayer {
    pub fn new(handler: Handler) -> Self {
        HandlerLayer { handler }
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    fn callsite(meta: &'static Metadata<'static>) -> Option<CallSite> {
        let file = meta.file()?;
        let line = meta.line()?;
        let function = meta.module_path().unwrap_or_else(|| meta.target());
        Some(CallSite::new(file, line, function))
    }
}

impl<S> Layer<S> for HandlerLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.handler.enabled(Level::from(*metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let level = Level::from(*meta.level());
        if !self.handler.enabled(level) {
            return;
        }

        let mut attrs = Vec::new();
        let mut message: Option<String> = None;
        let mut visitor = FieldVisitor {
            attrs: &mut attrs,
            message: &mut message,
        };
        event.record(&mut visitor);

        let callsite = if self.handler.wants_source(level) {
            Self::callsite(meta)
        } else {
            None
        };

        let record = LogRecord::new(level, message.unwrap_or_default())
            .with_callsite(callsite)
            .with_attrs(attrs);

        if let Err(e) = self.handler.handle(&record) {
            eprintln!("dropping log record: {}", e);
        }
    }
}

/// Collects event fields as [`Attr`]s.
pub struct FieldVisitor<'a> {
    pub attrs: &'a mut Vec<Attr>,
    pub message: &'a mut Option<String>,
}

impl<'a> FieldVisitor<'a> {
    fn push(&mut self, field: &Field, value: Value) {
        self.attrs.push(Attr::new(field.name(), value));
    }
}

impl<'a> Visit for FieldVisitor<'a> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            *self.message = Some(value.to_string());
        } else {
            self.push(field, Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, Value::I64(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, Value::U64(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, Value::F64(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, Value::Bool(value));
    }

    // The error is borrowed, so render it now rather than at write time.
    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push(field, Value::String(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.message = Some(format!("{:?}", value));
        } else {
            self.push(field, Value::String(format!("{:?}", value)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HandlerConfig;
    use crate::extra::ExtraFields;
    use crate::sink::MemorySink;
    use serde_json::{json, Value as Json};
    use tracing_subscriber::layer::SubscriberExt;

    fn capture(level: &str, f: impl FnOnce()) -> Vec<Json> {
        let sink = MemorySink::new();
        let handler = Handler::new(sink.clone(), HandlerConfig::from_level_str(level), ExtraFields::new());
        let subscriber = tracing_subscriber::registry().with(HandlerLayer::new(handler));
        tracing::subscriber::with_default(subscriber, f);
        sink.lines()
            .iter()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn events_become_records() {
        let docs = capture("info", || {
            tracing::debug!("hidden");
            tracing::warn!(pct = 7, mount = "/var", "disk low");
        });

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["severity"], "WARNING");
        assert_eq!(docs[0]["message"], "disk low");
        assert_eq!(docs[0]["context"], json!({"pct": 7, "mount": "/var"}));
        assert!(docs[0].get("logging.googleapis.com/sourceLocation").is_none());
    }

    #[test]
    fn errors_carry_event_location() {
        let mut line = 0;
        let docs = capture("debug", || {
            let err = std::io::Error::new(std::io::ErrorKind::Other, "socket reset");
            let err: &(dyn std::error::Error + 'static) = &err;
            line = line!() + 1;
            tracing::error!(error = err, "request failed");
        });

        let loc = &docs[0]["logging.googleapis.com/sourceLocation"];
        assert_eq!(loc["file"], file!());
        assert_eq!(loc["line"], line);
        assert_eq!(loc["function"], module_path!());
        assert_eq!(docs[0]["context"]["error"], "socket reset");
    }
}
