//! # Verge Telemetry
//!
//! Structured logging setup for Verge workers.
//!
//! The pipeline itself only *emits* `tracing` events; this crate owns the
//! subscriber wiring a host binary installs once at startup.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, LogConfig};
