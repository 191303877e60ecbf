//! Tracing subscriber setup for the binary

use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `fallback_filter`. Returns an error if a
/// subscriber is already installed or the filter does not parse.
pub fn init_tracing(fallback_filter: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback_filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
