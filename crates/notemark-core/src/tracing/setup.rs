//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Notemark tracing/logging system.
///
/// Reads the `NOTEMARK_LOG` environment variable for per-crate log levels,
/// e.g. `NOTEMARK_LOG=notemark_engine=debug,notemark_core=warn`.
///
/// Falls back to `info` for both crates if `NOTEMARK_LOG` is not set or is
/// invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("NOTEMARK_LOG")
            .unwrap_or_else(|_| EnvFilter::new("notemark_core=info,notemark_engine=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
