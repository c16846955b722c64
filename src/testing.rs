use std::sync::Once;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_LOGGING: Once = Once::new();

/// Install a fmt subscriber once per test binary; output goes through the
/// test harness capture. Filter with `RUST_LOG`, default `debug`.
pub(crate) fn init_test_logging() {
    TEST_LOGGING.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_test_writer()
                .with_filter(env_filter),
        );

        if tracing::dispatcher::has_been_set() {
            debug!("Tracing subscriber already set");
        } else {
            subscriber.try_init().unwrap_or_else(|e| {
                eprintln!("Error: Failed to set up logging: {}", e);
            });
        }
    });
}
