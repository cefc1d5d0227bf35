//! # Verge
//!
//! **Railway-oriented HTTP request pipeline for edge workers**
//!
//! Verge turns a raw edge request into a typed route, threads an immutable
//! context through a short-circuiting middleware chain, dispatches to a
//! handler, and maps every outcome (success or one of several failure
//! kinds) to an HTTP response:
//!
//! ```text
//! Request → Route Matcher → Context → Logging → Timing → CORS → Auth → Handler
//!                                         ↓ (any failure, anywhere)
//!                               400 / 404 / 401 response
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bytes::Bytes;
//! use http::{HeaderMap, Method};
//! use verge::core::EdgeRequest;
//! use verge::worker::Worker;
//!
//! let worker = Worker::new();
//!
//! let request = EdgeRequest::new(Method::GET, "/health", HeaderMap::new(), Bytes::new());
//! let response = worker.handle(request).await;
//! assert_eq!(response.status(), http::StatusCode::OK);
//! ```

#![doc(html_root_url = "https://docs.rs/verge/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use verge_core as core;

// Re-export middleware types
pub use verge_middleware as middleware;

// Re-export router types
pub use verge_router as router;

// Re-export telemetry setup
pub use verge_telemetry as telemetry;

// Re-export the worker pipeline
pub use verge_worker as worker;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use verge_core::{
        combine, AuthenticatedUser, EdgeRequest, EdgeResponse, HttpContext, Outcome, RequestId,
    };
    pub use verge_middleware::{compose, middleware, Middleware};
    pub use verge_router::{parse, ApiRoute, ProductsRoute, UsersRoute};
    pub use verge_worker::{dispatch, Worker, WorkerConfig};
}
