//! # Verge Middleware
//!
//! The middleware chain for the Verge edge-worker pipeline.
//!
//! A middleware is a pure function from [`HttpContext`] to
//! `Outcome<HttpContext>`; [`compose`] sequences an ordered list of them
//! into a single middleware that threads each step's context into the next
//! and stops at the first failure. The built-in stages live in [`stages`].
//!
//! [`HttpContext`]: verge_core::HttpContext

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod middleware;
pub mod stages;

pub use middleware::{compose, middleware, Middleware, MiddlewareFn};
