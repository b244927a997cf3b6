//! Tracing bootstrap for hosts that want the helpers' diagnostics on stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

const FALLBACK_LEVEL: &str = "info";

/// ## Summary
/// Installs a global `tracing` subscriber filtered by `config.level`.
///
/// An unparsable level falls back to `info` and logs a warning once the
/// subscriber is active.
///
/// ## Errors
/// Returns an error if a global subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let (filter, rejected) = match EnvFilter::try_new(config.level.as_str()) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new(FALLBACK_LEVEL), true),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    if rejected {
        tracing::warn!(
            level = %config.level,
            "Invalid log level in config, using {FALLBACK_LEVEL}"
        );
    }

    Ok(())
}
