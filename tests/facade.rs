use gcp_log_handler::sink::MemorySink;
use gcp_log_handler::{context, debug, error, info, log, warn};
use gcp_log_handler::{Attr, ExtraFields, Handler, HandlerConfig, Level, Logger};
use serde_json::{json, Value};

const SOURCE: &str = "logging.googleapis.com/sourceLocation";

fn capture_logger(level: &str) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let handler = Handler::new(sink.clone(), HandlerConfig::from_level_str(level), ExtraFields::new());
    (Logger::new(handler), sink)
}

fn docs(sink: &MemorySink) -> Vec<Value> {
    sink.lines()
        .iter()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn macros_attach_call_site_for_debug_and_error() {
    let (logger, sink) = capture_logger("debug");

    let debug_line = line!() + 1;
    debug!(logger: logger, "cache miss", key = "user:1");
    info!(logger: logger, "served", status = 200);
    warn!(logger: logger, "slow", "latency.ms" = 950);
    let error_line = line!() + 1;
    error!(logger: logger, "failed", status = 500,);

    let out = docs(&sink);
    assert_eq!(out.len(), 4);

    assert_eq!(out[0]["severity"], "DEBUG");
    assert_eq!(out[0][SOURCE]["line"], debug_line);
    assert_eq!(out[0][SOURCE]["file"], file!());
    assert_eq!(
        out[0][SOURCE]["function"],
        "facade::macros_attach_call_site_for_debug_and_error"
    );
    assert_eq!(out[0]["context"], json!({"key": "user:1"}));

    assert!(out[1].get(SOURCE).is_none());
    assert_eq!(out[1]["severity"], "INFO");

    assert!(out[2].get(SOURCE).is_none());
    assert_eq!(out[2]["context"], json!({"latency.ms": 950}));

    assert_eq!(out[3]["severity"], "ERROR");
    assert_eq!(out[3][SOURCE]["line"], error_line);
}

fn helper_that_logs(logger: &Logger) -> u32 {
    let line = line!() + 1;
    error!(logger: logger, "from helper");
    line
}

#[test]
fn call_site_points_at_the_application_frame() {
    let (logger, sink) = capture_logger("debug");
    let line = helper_that_logs(&logger);

    let doc = &docs(&sink)[0];
    assert_eq!(doc[SOURCE]["line"], line);
    assert_eq!(doc[SOURCE]["function"], "facade::helper_that_logs");
}

fn load_profile(logger: &Logger) {
    error!(logger: logger, "profile missing");
}

fn save_profile(logger: &Logger) {
    error!(logger: logger, "profile not saved");
}

#[test]
fn function_identifier_names_the_enclosing_function() {
    let (logger, sink) = capture_logger("debug");
    load_profile(&logger);
    save_profile(&logger);

    let out = docs(&sink);
    let first = out[0][SOURCE]["function"].as_str().unwrap();
    let second = out[1][SOURCE]["function"].as_str().unwrap();
    assert_ne!(first, second);
    assert!(first.ends_with("::load_profile"), "got {}", first);
    assert!(second.ends_with("::save_profile"), "got {}", second);
}

#[test]
fn disabled_levels_do_not_evaluate_attributes() {
    let (logger, sink) = capture_logger("error");
    let mut evaluated = false;
    info!(logger: logger, "skipped", side = {
        evaluated = true;
        1
    });
    assert!(!evaluated);
    assert!(sink.lines().is_empty());
}

#[test]
fn custom_levels_go_through_log() {
    let (logger, sink) = capture_logger("info");
    log!(logger: logger, Level(10), "critical", code = 7);
    log!(logger: logger, Level(-2), "below threshold");

    let out = docs(&sink);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0]["severity"], "ERROR");
    // Only exact source levels carry a location.
    assert!(out[0].get(SOURCE).is_none());
}

#[test]
fn derived_loggers_carry_preset_attrs() {
    let (logger, sink) = capture_logger("info");
    let request = logger.with([Attr::new("request_id", "r-1")]);
    info!(logger: request, "handled", status = 204);
    info!(logger: logger, "idle");

    let out = docs(&sink);
    assert_eq!(out[0]["context"], json!({"request_id": "r-1", "status": 204}));
    assert_eq!(out[1]["context"], json!({}));
}

#[tokio::test]
async fn scoped_logger_is_picked_up_by_macros() {
    let (logger, sink) = capture_logger("debug");
    let scoped = logger.with([Attr::new("tenant", "acme")]);

    context::with_logger(scoped, async {
        info!("inside scope", step = 1);
        tokio::task::yield_now().await;
        warn!("still inside", step = 2);
    })
    .await;

    let out = docs(&sink);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0]["context"], json!({"tenant": "acme", "step": 1}));
    assert_eq!(out[1]["context"], json!({"tenant": "acme", "step": 2}));
}

#[test]
fn sync_scope_routes_macros() {
    let (logger, sink) = capture_logger("info");
    context::sync_scope(logger, || {
        info!("sync");
    });
    assert_eq!(sink.lines().len(), 1);
}
