//! Logging initialization.
//!
//! Logs go to stderr so stdout only carries command output.

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter directives, e.g. `TDRAW_LOG=debug`.
pub const LOG_ENV: &str = "TDRAW_LOG";

/// Set to `json` for structured log lines.
pub const LOG_FORMAT_ENV: &str = "TDRAW_LOG_FORMAT";

/// Install the global subscriber. Defaults to `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = matches!(std::env::var(LOG_FORMAT_ENV).as_deref(), Ok("json"));

    let fmt_layer = if json {
        fmt::layer().json().with_writer(io::stderr).boxed()
    } else {
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .boxed()
    };

    // A subscriber may already be installed (tests).
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init();
}
