//! Logging setup (`tracing` + `tracing-subscriber`).
//!
//! Logs go to stderr; stdout carries the CSV output only.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global subscriber.
///
/// `RUST_LOG` selects the filter (default: `info`), e.g.
/// `RUST_LOG=slcsp=debug` to see why individual codes were left blank.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Verbose subscriber for tests; safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
