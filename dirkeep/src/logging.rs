// src/logging.rs
//! Development-time tracing, separate from the run log.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`; it is diagnostic
//! only. The persistent record of what a run did lives in the run log
//! (`report::append_run_log`) and is always written.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output is compact, on stderr, so
/// it never mixes with the summary on stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
