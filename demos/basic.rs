use gcp_log_handler::{debug, error, info, init, warn, Attr, Value};
use std::time::Duration;

fn main() {
    let logger = init::init_from_env();
    init::merge_global_extra_fields([("service", "billing"), ("env", "dev")]);

    info!("starting service", port = 8080);
    debug!("loaded config", entries = 12);

    let request = logger.with([Attr::new("request_id", "req-42")]);
    warn!(logger: request, "slow upstream", elapsed = Duration::from_millis(1250));

    let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    error!(logger: request, "payment failed", cause = Value::error(err), retry = false);
}
