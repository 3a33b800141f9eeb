pub mod builders;
pub mod fake_service;
pub mod server;

use std::sync::Once;

use tasksort::logging::{LOG_ENV, filter_directives};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests with the same filter rules as the binary.
///
/// `TASKSORT_LOG=tasksort=debug,tower_http=info cargo test` widens the output;
/// logs go through the test writer, so only failing tests print them.
pub fn init_tracing() {
    INIT.call_once(|| {
        let env = std::env::var(LOG_ENV).ok();
        let filter = EnvFilter::try_new(filter_directives(None, env.as_deref()))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Run a future with a 5-second timeout.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}
