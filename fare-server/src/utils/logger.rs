//! Logging Infrastructure
//!
//! `RUST_LOG` controls the filter. `LOG_FORMAT=json` switches to
//! line-delimited JSON output for log shippers.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "fare_server=info,tower_http=info";

/// Initialize the global logger
pub fn init_logger() {
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    init_logger_with_format(json);
}

pub fn init_logger_with_format(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let result = if json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.with_target(false).try_init()
    };
    if let Err(e) = result {
        tracing::debug!("Logger already initialized: {e}");
    }
}
