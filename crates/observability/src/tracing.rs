//! Tracing/logging initialization.
//!
//! The engine crates emit spans/events through `tracing`; host processes
//! (sync jobs, API servers) call [`init`] once at startup to subscribe.

use tracing_subscriber::EnvFilter;

/// Initialize JSON logging filtered via `RUST_LOG`.
///
/// Without `RUST_LOG` the engine crates log at `info` and everything else at
/// `warn`. Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stayforge=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
