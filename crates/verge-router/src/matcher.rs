//! The route matcher.
//!
//! An ordered rule list over normalized path segments. Rules are evaluated
//! top to bottom; the first rule whose method matches and whose segment
//! pattern matches (including extractor conversions) wins. Rules with a
//! literal segment in a position where a later rule has an extractor come
//! first, mirroring static-before-parameter priority.

use crate::extract::{email_segment, int_segment, uuid_segment};
use crate::route::{ApiRoute, ProductsRoute, UsersRoute};
use http::Method;

/// Resolves a method and path to a route.
///
/// The matcher owns path normalization: empty segments from leading,
/// trailing, or duplicate slashes are dropped, so `"/"` yields the empty
/// segment sequence (matching [`ApiRoute::Home`]) and `"/api/users/"`
/// matches like `"/api/users"`.
///
/// Pure and deterministic: identical input always yields an equal route,
/// and unclassifiable input degrades to [`ApiRoute::NotFound`] rather than
/// an error.
///
/// # Example
///
/// ```
/// use http::Method;
/// use verge_router::{parse, ApiRoute, UsersRoute};
///
/// assert_eq!(
///     parse(&Method::GET, "/api/users/7"),
///     ApiRoute::Users(UsersRoute::ById(7)),
/// );
/// assert_eq!(parse(&Method::GET, "/api/users/seven"), ApiRoute::NotFound);
/// ```
#[must_use]
pub fn parse(method: &Method, path: &str) -> ApiRoute {
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    match_rules(method, &segments)
}

fn match_rules(method: &Method, segments: &[&str]) -> ApiRoute {
    match segments {
        [] if method == Method::GET => ApiRoute::Home,
        ["health"] if method == Method::GET => ApiRoute::Health,

        ["api", "users"] if method == Method::GET => ApiRoute::Users(UsersRoute::List),
        ["api", "users"] if method == Method::POST => ApiRoute::Users(UsersRoute::Create),
        ["api", "users", "search", term] if method == Method::GET => match email_segment(term) {
            Some(email) => ApiRoute::Users(UsersRoute::Search(email.to_string())),
            None => ApiRoute::NotFound,
        },
        ["api", "users", id] if method == Method::GET => match int_segment(id) {
            Some(id) => ApiRoute::Users(UsersRoute::ById(id)),
            None => ApiRoute::NotFound,
        },
        ["api", "users", id] if method == Method::PUT => match int_segment(id) {
            Some(id) => ApiRoute::Users(UsersRoute::Update(id)),
            None => ApiRoute::NotFound,
        },

        ["api", "products"] if method == Method::GET => ApiRoute::Products(ProductsRoute::List),
        ["api", "products"] if method == Method::POST => {
            ApiRoute::Products(ProductsRoute::Create)
        }
        ["api", "products", "search", term] if method == Method::GET => {
            ApiRoute::Products(ProductsRoute::Search((*term).to_string()))
        }
        ["api", "products", id] if method == Method::GET => match uuid_segment(id) {
            Some(id) => ApiRoute::Products(ProductsRoute::ById(id)),
            None => ApiRoute::NotFound,
        },
        ["api", "products", id] if method == Method::PUT => match uuid_segment(id) {
            Some(id) => ApiRoute::Products(ProductsRoute::Update(id)),
            None => ApiRoute::NotFound,
        },

        _ => ApiRoute::NotFound,
    }
}
