//! Per-task logger storage.
//!
//! A logger can be scoped to an async task (or a synchronous closure) so that
//! code deeper in a request picks it up through [`current`] without threading
//! it through every call.

use crate::init::default_logger;
use crate::logger::Logger;
use std::future::Future;

tokio::task_local! {
    static CURRENT: Logger;
}

/// Run `fut` with `logger` as the current logger.
pub fn with_logger<F>(logger: Logger, fut: F) -> impl Future<Output = F::Output>
where
    F: Future,
{
    CURRENT.scope(logger, fut)
}

/// Run `f` with `logger` as the current logger.
pub fn sync_scope<R>(logger: Logger, f: impl FnOnce() -> R) -> R {
    CURRENT.sync_scope(logger, f)
}

/// The scoped logger, or the default logger outside any scope.
pub fn current() -> Logger {
    CURRENT
        .try_with(Logger::clone)
        .unwrap_or_else(|_| default_logger())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Attr;

    #[test]
    fn sync_scope_overrides_current() {
        let scoped = Logger::discard().with([Attr::new("request_id", "abc")]);
        let seen = sync_scope(scoped, || current().handler().attrs().len());
        assert_eq!(seen, 1);
    }

    #[tokio::test]
    async fn task_scope_overrides_current() {
        let scoped = Logger::discard().with_group("req");
        let group = with_logger(scoped, async {
            tokio::task::yield_now().await;
            current().handler().group().map(str::to_string)
        })
        .await;
        assert_eq!(group.as_deref(), Some("req"));
    }
}
