//! Built-in middleware stages.
//!
//! The worker's default chain runs these in order: logging, timing, CORS,
//! auth. Each stage is constructed once and reused across requests.

pub mod auth;
pub mod cors;
pub mod logging;
pub mod timing;

pub use auth::{auth, AuthConfig};
pub use cors::{cors, CorsConfig};
pub use logging::logging;
pub use timing::{timing, START_CLAIM};
