// File: src/logging.rs
use crate::config::env_bool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_JSON_VAR: &str = "MENTOR_LOG_JSON";

/// Installs the global subscriber for the binaries. Logs go to stderr so
/// stdout stays free for the chat and the pipe protocol. Filter with
/// `RUST_LOG`; set `MENTOR_LOG_JSON=1` for JSON lines.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if env_bool(LOG_JSON_VAR, false) {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("[mentor] tracing already initialized: {e}");
    }
}
