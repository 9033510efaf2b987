//! Development-time tracing for debugging the checklist controller.
//!
//! Persistence failures are reported at `warn`, transitions at `debug`. Hosts
//! that already install a subscriber can skip [`init`] entirely.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// Fails if a global subscriber has already been installed.
///
/// # Example
/// ```bash
/// RUST_LOG=checklist=debug cargo test
/// ```
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .map_err(|err| anyhow!("install tracing subscriber: {err}"))
}
