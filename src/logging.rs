//! Structured logging setup for the `segwind` binary

use std::env;
use std::io;

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
/// (or `debug` when verbose) applied to this crate only.
fn env_filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { config.level.as_str() };

    env::var("RUST_LOG").map_or_else(
        |_| EnvFilter::new(format!("warn,segwind={level}")),
        EnvFilter::new,
    )
}

/// Install the global subscriber. Logs go to stderr so stdout stays machine-readable.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(config, verbose));

    let result = match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().with_writer(io::stderr).with_target(true).json())
            .try_init(),
        _ => registry
            .with(fmt::layer().with_writer(io::stderr).with_target(false).pretty())
            .try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_uses_configured_level() {
        if env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig {
            level: "trace".to_string(),
            format: "pretty".to_string(),
        };
        assert!(env_filter(&config, false).to_string().contains("segwind=trace"));
        assert!(env_filter(&config, true).to_string().contains("segwind=debug"));
    }
}
