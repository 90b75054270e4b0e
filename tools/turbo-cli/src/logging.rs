//! Tracing subscriber setup.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`, then config.
fn filter_directive(config: &LoggingConfig, verbose: bool, rust_log: Option<String>) -> String {
    match rust_log.filter(|v| !v.trim().is_empty()) {
        Some(directive) => directive,
        None if verbose => "debug".to_string(),
        None => config.level.clone(),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for `--json` output.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let directive = filter_directive(config, verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow!("Invalid log filter '{}': {}", directive, e))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.try_init(),
    };
    result.map_err(|e| anyhow!("Failed to install logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_takes_precedence() {
        let config = LoggingConfig::default();
        assert_eq!(
            filter_directive(&config, true, Some("turbo_store=trace".to_string())),
            "turbo_store=trace"
        );
    }

    #[test]
    fn test_verbose_forces_debug() {
        let config = LoggingConfig::default();
        assert_eq!(filter_directive(&config, true, None), "debug");
        assert_eq!(filter_directive(&config, false, Some("  ".to_string())), "info");
    }
}
