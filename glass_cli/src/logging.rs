//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "GLASS_LOG";

static INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// Reads `GLASS_LOG` for the filter (e.g. `GLASS_LOG=glass_core=debug`),
/// falling back to `warn`. Stdout stays clean for tables and JSON.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

        // A subscriber set elsewhere wins; nothing to do then
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}
