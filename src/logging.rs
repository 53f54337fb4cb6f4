//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "FREQSUM_LOG";

/// Initialize the tracing subscriber, logging to stderr.
///
/// Reads the filter from `FREQSUM_LOG` (e.g. `FREQSUM_LOG=freqsum=debug`).
/// Falls back to `freqsum=debug` when `verbose` is set and `freqsum=warn`
/// otherwise. Calling it more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "freqsum=debug" } else { "freqsum=warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
