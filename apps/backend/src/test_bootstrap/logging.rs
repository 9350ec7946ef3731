//! Logging bootstrap for unit tests.
//!
//! Integration tests go through backend-test-support; in-crate unit tests use
//! this thin initializer instead so log output respects RUST_LOG without
//! double-initializing.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Another test may have installed a subscriber already; that is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
