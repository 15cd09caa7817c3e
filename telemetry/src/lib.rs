//! Tracing setup shared by the workspace's tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable that turns on log output in tests.
const ENABLE_TRACING_ENV_NAME: &str = "ENABLE_TRACING";

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_TEST_FILTER: &str = "info";

static INIT_TEST_TRACING: Once = Once::new();

/// Installs a test-friendly tracing subscriber once per process.
///
/// Output is only produced when `ENABLE_TRACING` is set, so tests stay quiet by
/// default. `RUST_LOG` controls the filter and defaults to `info`.
pub fn init_test_tracing() {
    INIT_TEST_TRACING.call_once(|| {
        if std::env::var_os(ENABLE_TRACING_ENV_NAME).is_none() {
            return;
        }

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        // Another test harness may already own the global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
