use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "expense_tracker=warn";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// Logs go to stderr so the interactive menu on stdout stays readable.
/// `RUST_LOG` overrides the default `expense_tracker=warn` filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // A subscriber installed by the host (e.g. a test harness) wins.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
