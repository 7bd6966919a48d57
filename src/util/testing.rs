//! One-time tracing setup for integration tests.

use std::env;
use std::sync::Once;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install a global tracing subscriber once. Safe to call from every
/// test; only the first call has an effect.
pub fn init_test_setup() {
    TEST_SETUP.call_once(setup_test_logging);
}

fn setup_test_logging() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "debug");
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        )
        .init();

    debug!("test logging initialized");
}
