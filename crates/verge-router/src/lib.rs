//! # Verge Router
//!
//! Typed route matching for the Verge edge-worker pipeline.
//!
//! Incoming `(method, path)` pairs resolve to values of the closed
//! [`ApiRoute`] sum type via [`parse`]. Matching is an ordered rule list
//! with typed segment extractors: a rule with an extractor only matches
//! when the conversion succeeds, so `/api/users/7` and `/api/users/alice`
//! resolve to different routes. The matcher is total: anything it cannot
//! classify is [`ApiRoute::NotFound`], never an error.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod extract;
mod matcher;
mod route;

pub use matcher::parse;
pub use route::{ApiRoute, ProductsRoute, UsersRoute};
