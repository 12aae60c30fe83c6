use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Typed value carried by an [`Attr`].
///
/// Values keep their original type until the handler renders them, so
/// classification for normalization is by type and never by key.
#[derive(Clone)]
pub enum Value {
    String(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    Duration(Duration),
    Time(DateTime<Utc>),
    Error(Arc<dyn Error + Send + Sync>),
    Json(serde_json::Value),
}

impl Value {
    /// Wrap an error so that it renders as its description.
    pub fn error<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Value::Error(Arc::new(err))
    }

    /// Lift any serializable value into a JSON attribute value.
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Value::Json)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::I64(n) => f.debug_tuple("I64").field(n).finish(),
            Value::U64(n) => f.debug_tuple("U64").field(n).finish(),
            Value::F64(n) => f.debug_tuple("F64").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Duration(d) => f.debug_tuple("Duration").field(d).finish(),
            Value::Time(t) => f.debug_tuple("Time").field(t).finish(),
            Value::Error(e) => f.debug_tuple("Error").field(&e.to_string()).finish(),
            Value::Json(v) => f.debug_tuple("Json").field(v).finish(),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident as $cast:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v as $cast)
                }
            }
        )*
    };
}

impl_from! {
    i8 => I64 as i64,
    i16 => I64 as i64,
    i32 => I64 as i64,
    i64 => I64 as i64,
    isize => I64 as i64,
    u8 => U64 as u64,
    u16 => U64 as u64,
    u32 => U64 as u64,
    u64 => U64 as u64,
    usize => U64 as u64,
    f32 => F64 as f64,
    f64 => F64 as f64,
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Value::Duration(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Time(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl From<Arc<dyn Error + Send + Sync>> for Value {
    fn from(v: Arc<dyn Error + Send + Sync>) -> Self {
        Value::Error(v)
    }
}

impl From<Box<dyn Error + Send + Sync>> for Value {
    fn from(v: Box<dyn Error + Send + Sync>) -> Self {
        Value::Error(Arc::from(v))
    }
}

/// A single key/value pair attached to a handler or a record.
#[derive(Debug, Clone)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Attr {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Convert an attribute value into its JSON-safe form.
///
/// **Rules**
/// - errors render as their `Display` text;
/// - durations render as whole milliseconds, truncated
///   (1_999_999ns becomes `1`);
/// - non-finite floats render as `null`;
/// - everything else passes through unchanged.
pub fn normalize(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::I64(n) => serde_json::Value::from(*n),
        Value::U64(n) => serde_json::Value::from(*n),
        Value::F64(n) => serde_json::Value::from(*n),
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Duration(d) => duration_millis(*d),
        Value::Time(t) => serde_json::Value::String(t.to_rfc3339_opts(SecondsFormat::Nanos, true)),
        Value::Error(e) => serde_json::Value::String(e.to_string()),
        Value::Json(v) => v.clone(),
    }
}

fn duration_millis(d: Duration) -> serde_json::Value {
    serde_json::Value::from(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
