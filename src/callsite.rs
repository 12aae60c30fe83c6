//! Call-site resolution for log records.
//!
//! Every public logging entry point in this crate is either a macro, which
//! expands inside the application's own code, or a `#[track_caller]` function.
//! The compiler threads the caller's location through each `#[track_caller]`
//! layer, so [`CallSite::resolve`] always lands on the application frame no
//! matter how many internal wrappers sit in between. Adding a new wrapper only
//! requires marking it `#[track_caller]` as well.

use crate::level::Level;
use serde::Serialize;
use std::borrow::Cow;
use std::panic::Location;

/// Program location of the code that called into the logging facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSite {
    pub file: Cow<'static, str>,
    pub line: u32,
    pub function: Cow<'static, str>,
}

impl CallSite {
    pub fn new(
        file: impl Into<Cow<'static, str>>,
        line: u32,
        function: impl Into<Cow<'static, str>>,
    ) -> Self {
        CallSite {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// Location of the nearest caller outside the `#[track_caller]` chain.
    ///
    /// `function` identifies the calling code; the macros pass the path of
    /// the function they expand in.
    #[track_caller]
    pub fn resolve(function: &'static str) -> Self {
        let loc = Location::caller();
        CallSite::new(loc.file(), loc.line(), function)
    }
}

/// Resolve a call-site only when `level` is one of `source_levels`.
#[track_caller]
pub fn resolve_for(level: Level, source_levels: &[Level], function: &'static str) -> Option<CallSite> {
    if source_levels.contains(&level) {
        Some(CallSite::resolve(function))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn inner_wrapper() -> CallSite {
        CallSite::resolve(module_path!())
    }

    #[track_caller]
    fn outer_wrapper() -> CallSite {
        inner_wrapper()
    }

    #[test]
    fn resolves_through_wrapping_layers() {
        let expected_line = line!() + 1;
        let site = outer_wrapper();
        assert_eq!(site.line, expected_line);
        assert_eq!(site.file, file!());
        assert_eq!(site.function, "gcp_log_handler::callsite::tests");
    }

    #[test]
    fn skips_levels_without_source() {
        let levels = [Level::DEBUG, Level::ERROR];
        assert!(resolve_for(Level::INFO, &levels, "app").is_none());
        assert!(resolve_for(Level::WARN, &levels, "app").is_none());
        assert!(resolve_for(Level(9), &levels, "app").is_none());

        let expected_line = line!() + 1;
        let site = resolve_for(Level::ERROR, &levels, "app").unwrap();
        assert_eq!(site.line, expected_line);
        assert_eq!(site.function, "app");
    }
}
