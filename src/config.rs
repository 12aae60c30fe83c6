use crate::env::{env_or, LOG_LEVEL_ENV, LOG_SOURCE_LEVELS_ENV};
use crate::level::Level;

/// Construction-time settings for a [`Handler`](crate::handler::Handler).
///
/// **Fields**
/// - `level`: records below this level are not enabled.
/// - `source_levels`: levels whose records carry a source location. Matching
///   is exact, so a custom level near `ERROR` does not qualify.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerConfig {
    pub level: Level,
    pub source_levels: Vec<Level>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            source_levels: vec![Level::DEBUG, Level::ERROR],
        }
    }
}

impl HandlerConfig {
    /// Default settings with the threshold taken from a level name.
    /// Unrecognized names enable everything from `debug` up.
    pub fn from_level_str(level: &str) -> Self {
        Self {
            level: Level::parse(level),
            ..Self::default()
        }
    }

    /// Build settings from [`LOG_LEVEL_ENV`] and [`LOG_SOURCE_LEVELS_ENV`].
    pub fn from_env() -> Self {
        let mut config = Self::from_level_str(&env_or(LOG_LEVEL_ENV, "info"));
        let source = env_or(LOG_SOURCE_LEVELS_ENV, "");
        if !source.trim().is_empty() {
            config.source_levels = parse_level_list(&source);
        }
        config
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_source_levels(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.source_levels = levels.into_iter().collect();
        self
    }
}

fn parse_level_list(s: &str) -> Vec<Level> {
    let mut levels: Vec<Level> = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Level::parse)
        .collect();
    levels.sort();
    levels.dedup();
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_with_debug_and_error_sources() {
        let c = HandlerConfig::default();
        assert_eq!(c.level, Level::INFO);
        assert_eq!(c.source_levels, vec![Level::DEBUG, Level::ERROR]);
    }

    #[test]
    fn unknown_level_name_enables_debug() {
        assert_eq!(HandlerConfig::from_level_str("warn").level, Level::WARN);
        assert_eq!(HandlerConfig::from_level_str("loud").level, Level::DEBUG);
        assert_eq!(HandlerConfig::from_level_str("INFO").level, Level::DEBUG);
        assert_eq!(HandlerConfig::from_level_str("warn ").level, Level::DEBUG);
    }

    #[test]
    fn level_lists_parse_and_dedup() {
        assert_eq!(
            parse_level_list("error, debug,,error"),
            vec![Level::DEBUG, Level::ERROR]
        );
        assert_eq!(parse_level_list("warn"), vec![Level::WARN]);
    }
}
