//! Structured logging that writes one Cloud Logging compatible JSON document
//! per line.
//!
//! The core is [`Handler`], which renders a [`LogRecord`] and writes it to a
//! [`LogSink`]. [`Logger`] and the [`log!`], [`debug!`], [`info!`], [`warn!`]
//! and [`error!`] macros sit in front of it and attach the caller's location
//! to `debug` and `error` records.
//!
//! ```no_run
//! use gcp_log_handler::{info, error, init};
//!
//! init::init("info");
//! init::merge_global_extra_fields([("env", "prod")]);
//!
//! info!("server started", port = 8080);
//! error!("request failed", status = 503);
//! ```

pub mod attr;
pub mod callsite;
pub mod config;
pub mod context;
pub mod env;
pub mod error;
pub mod extra;
pub mod handler;
pub mod init;
pub mod level;
pub mod logger;
pub mod noop_sink;
pub mod record;
pub mod sink;

#[cfg(feature = "tracing-bridge")]
pub mod layer;

mod macros;

pub use attr::{Attr, Value};
pub use callsite::CallSite;
pub use config::HandlerConfig;
pub use error::HandleError;
pub use extra::ExtraFields;
pub use handler::Handler;
pub use level::{Level, Severity};
pub use logger::Logger;
pub use record::LogRecord;
pub use sink::LogSink;
