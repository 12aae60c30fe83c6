use gcp_log_handler::init::init_tracing;
use gcp_log_handler::{ExtraFields, Handler, HandlerConfig};
use tracing::{error, info};

fn main() {
    let extra = ExtraFields::global();
    extra.merge([("service", "auth")]);

    let handler = Handler::stdout(HandlerConfig::from_env());
    if let Err(e) = init_tracing(handler) {
        eprintln!("tracing already initialized: {}", e);
        return;
    }

    info!("starting service");

    error!(
        user_id = 42,
        reason = "invalid password",
        "authentication failed"
    );
}
