//! Telemetry error types.

use thiserror::Error;

/// Result type alias using [`TelemetryError`].
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Errors raised while configuring telemetry.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured log filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// The offending directive.
        directive: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Installing the global subscriber failed (usually: already set).
    #[error("failed to initialize logging: {0}")]
    Init(String),
}
