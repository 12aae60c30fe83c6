/// Log a message at an explicit [`Level`](crate::Level).
///
/// ```no_run
/// use gcp_log_handler::{log, Level};
///
/// log!(Level::WARN, "disk low", pct = 7, "mount.path" = "/var");
/// ```
///
/// Prefix the arguments with `logger: <expr>,` to use a specific
/// [`Logger`](crate::Logger) instead of [`context::current`](crate::context::current).
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $msg:expr $(, $key:tt = $value:expr)* $(,)?) => {{
        let __logger = &$logger;
        let __level: $crate::Level = $level;
        if __logger.enabled(__level) {
            let __attrs: ::std::vec::Vec<$crate::Attr> =
                ::std::vec![$($crate::Attr::new($crate::__attr_key!($key), $value)),*];
            __logger.log_from($crate::__function_name!(), __level, $msg, __attrs);
        }
    }};
    ($level:expr, $msg:expr $(, $key:tt = $value:expr)* $(,)?) => {
        $crate::log!(logger: $crate::context::current(), $level, $msg $(, $key = $value)*)
    };
}

/// Log at [`Level::DEBUG`](crate::Level::DEBUG). Records carry a source location.
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($rest:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::DEBUG, $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Level::DEBUG, $($rest)+)
    };
}

/// Log at [`Level::INFO`](crate::Level::INFO).
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($rest:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::INFO, $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Level::INFO, $($rest)+)
    };
}

/// Log at [`Level::WARN`](crate::Level::WARN).
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($rest:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::WARN, $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Level::WARN, $($rest)+)
    };
}

/// Log at [`Level::ERROR`](crate::Level::ERROR). Records carry a source location.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($rest:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::ERROR, $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Level::ERROR, $($rest)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __attr_key {
    ($key:ident) => {
        ::std::stringify!($key)
    };
    ($key:literal) => {
        $key
    };
}

/// Path of the enclosing function, e.g. `my_app::server::handle_request`.
///
/// Inside closures the path carries a trailing `{{closure}}` segment.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __f() {}
        let name: &'static str = ::std::any::type_name_of_val(&__f);
        name.strip_suffix("::__f").unwrap_or(name)
    }};
}
