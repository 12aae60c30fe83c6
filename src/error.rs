use std::io;

/// Error type returned when a record could not be emitted.
///
/// Either way the record is dropped; nothing is retried or buffered.
///
/// Attributes are already normalized to JSON values when the document is
/// built, so `Serialize` is not produced by the handler today. Values that
/// cannot be serialized are rejected earlier, by
/// [`Value::serialize`](crate::attr::Value::serialize).
#[derive(thiserror::Error, Debug)]
pub enum HandleError {
    #[error("failed to serialize log entry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write log entry: {0}")]
    Write(#[from] io::Error),
}
