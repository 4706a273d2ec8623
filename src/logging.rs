use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "money_manager=warn";

/// Installs the global tracing subscriber, writing to stderr.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
