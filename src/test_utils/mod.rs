//! Test utilities
//!
//! Fixtures for target manifests and one-time logging setup for tests.
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration suite.

pub mod fixtures;

pub use fixtures::ManifestFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither set no subscriber is installed.
///
/// ```bash
/// RUST_LOG=podfile_targets=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
