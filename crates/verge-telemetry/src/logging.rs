//! Structured logging initialization.
//!
//! Wires `tracing-subscriber` with an `EnvFilter`: the configured level is
//! the default directive and `RUST_LOG` can override it per module, which
//! keeps local debugging cheap without touching worker code.

use crate::error::TelemetryError;
use crate::TelemetryResult;
use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default log level directive (e.g. "info", "debug").
    pub level: String,

    /// Whether to emit JSON-formatted output.
    pub json_format: bool,

    /// Whether to include the event target (module path).
    pub include_target: bool,

    /// Service name recorded on every event.
    pub service_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: true, // JSON by default for production
            include_target: true,
            service_name: "verge".to_string(),
        }
    }
}

impl LogConfig {
    /// Human-readable output at debug level, for local development.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            json_format: false,
            ..Self::default()
        }
    }

    /// JSON output at info level.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }
}

/// Installs the global tracing subscriber.
///
/// Call once from the host binary before handling requests. Returns an
/// error if the filter directive is invalid or a subscriber is already
/// installed.
pub fn init_logging(config: &LogConfig) -> TelemetryResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|err| TelemetryError::InvalidFilter {
            directive: config.level.clone(),
            reason: err.to_string(),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.include_target);

    let result = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|err| TelemetryError::Init(err.to_string()))?;

    tracing::info!(service = %config.service_name, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_production_shaped() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.json_format);
    }

    #[test]
    fn test_development_config() {
        let config = LogConfig::development();
        assert_eq!(config.level, "debug");
        assert!(!config.json_format);
        assert_eq!(config.service_name, "verge");
    }

    #[test]
    fn test_second_initialization_fails() {
        // The first call may or may not win the global-subscriber slot
        // depending on test ordering; the second call from the same
        // process must always be rejected.
        let config = LogConfig::development();
        let _ = init_logging(&config);
        assert!(matches!(init_logging(&config), Err(TelemetryError::Init(_))));
    }
}
