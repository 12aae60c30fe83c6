//! Environment variable names used by this crate for convenient
//! configuration of the default logger.
//!
//! These are purely helpers; the handler itself never reads the environment.

/// Minimum enabled level: `debug`, `info`, `warn` or `error`.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Comma-separated level names whose records carry a source location,
/// e.g. `debug,error`.
pub const LOG_SOURCE_LEVELS_ENV: &str = "LOG_SOURCE_LEVELS";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
