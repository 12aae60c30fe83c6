use crate::attr::Attr;
use crate::config::HandlerConfig;
use crate::extra::ExtraFields;
use crate::handler::Handler;
use crate::logger::Logger;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

static DEFAULT: LazyLock<ArcSwap<Logger>> =
    LazyLock::new(|| ArcSwap::from_pointee(new_logger_with_config(HandlerConfig::default())));

/// Build a stdout logger for the given level name.
///
/// **Parameters**
/// - `level`: one of `debug`, `info`, `warn`, `error`. Anything else
///   enables every level from `debug` up.
///
/// The logger uses the process-wide [`ExtraFields`], so
/// [`merge_global_extra_fields`] affects it without rebuilding.
pub fn new_logger(level: &str) -> Logger {
    new_logger_with_config(HandlerConfig::from_level_str(level))
}

pub fn new_logger_with_config(config: HandlerConfig) -> Logger {
    Logger::new(Handler::stdout(config))
}

/// Build a stdout logger for `level` and install it as the default.
pub fn init(level: &str) -> Logger {
    let logger = new_logger(level);
    set_default(logger.clone());
    logger
}

/// Like [`init`], but reads its settings via [`HandlerConfig::from_env`].
pub fn init_from_env() -> Logger {
    let logger = new_logger_with_config(HandlerConfig::from_env());
    set_default(logger.clone());
    logger
}

/// Replace the logger used outside any [`context`](crate::context) scope.
pub fn set_default(logger: Logger) {
    DEFAULT.store(Arc::new(logger));
}

/// The logger used outside any [`context`](crate::context) scope.
///
/// Before [`init`] or [`set_default`] this writes `info` and above to stdout.
pub fn default_logger() -> Logger {
    Logger::clone(&DEFAULT.load())
}

/// Merge fields into the process-wide `extra` section.
pub fn merge_global_extra_fields<I, K, V>(fields: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<serde_json::Value>,
{
    ExtraFields::global().merge(fields);
}

/// Default logger with additional attributes.
pub fn with(attrs: impl IntoIterator<Item = Attr>) -> Logger {
    default_logger().with(attrs)
}

/// Default logger with a group name.
pub fn with_group(name: impl Into<String>) -> Logger {
    default_logger().with_group(name)
}

/// Install a [`Registry`] with a [`HandlerLayer`] as the global `tracing`
/// subscriber so `tracing` events are rendered by `handler`.
///
/// **Returns**
/// - `Err(..)` if a global subscriber was already set.
///
/// [`Registry`]: tracing_subscriber::Registry
/// [`HandlerLayer`]: crate::layer::HandlerLayer
#[cfg(feature = "tracing-bridge")]
pub fn init_tracing(handler: Handler) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    use tracing_subscriber::layer::SubscriberExt;

    let subscriber = tracing_subscriber::Registry::default().with(crate::layer::HandlerLayer::new(handler));
    tracing::subscriber::set_global_default(subscriber)
}
