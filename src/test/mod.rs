//! Shared helpers for the unit tests.


use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_LOGGING: Once = Once::new();

/// Installs a global subscriber printing `tracing` events through the test writer. Verbosity
/// follows `RUST_LOG`, defaulting to `debug`.
pub(crate) fn init_test_logging() {
    TEST_LOGGING.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(env_filter),
        );

        if let Err(e) = subscriber.try_init() {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
    });
}
