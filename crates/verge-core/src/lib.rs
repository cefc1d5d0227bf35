//! # Verge Core
//!
//! Core types for the Verge edge-worker request pipeline.
//!
//! This crate provides the foundational types used throughout Verge:
//!
//! - [`Outcome`] - Railway-oriented result of every pipeline step
//! - [`HttpContext`] - Immutable per-request context threaded through middleware
//! - [`RequestId`] - UUID v7 request identifier
//! - [`AuthenticatedUser`] - Caller identity populated by the auth stage
//! - [`EdgeRequest`] - Adapter over the hosting runtime's raw request
//! - [`response`] - Response construction helpers
//! - [`validate`] - Field validation building blocks for handlers

#![doc(html_root_url = "https://docs.rs/verge-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod context;
mod identity;
mod outcome;
mod request;
pub mod response;
pub mod validate;

pub use context::{HttpContext, RequestId};
pub use identity::AuthenticatedUser;
pub use outcome::{combine, Outcome};
pub use request::{BodyError, EdgeRequest};
pub use response::EdgeResponse;
