//! Diagnostic output on standard error.
//!
//! Standard output is reserved for command results (`randgen` writes raw
//! bytes there), so every log line goes to stderr.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `-v` is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Map the `-v` count to a filter directive.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_LEVEL,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(verbose: u8) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
