//! The route model.
//!
//! Routes are a closed sum type with nested sums per resource. The compiler
//! enforces exhaustiveness everywhere routes are consumed: adding a variant
//! breaks every non-exhaustive `match` at build time, which is the point.

use uuid::Uuid;

/// A resolved route for an incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRoute {
    /// `GET /`
    Home,
    /// `GET /health`
    Health,
    /// Operations under `/api/users`.
    Users(UsersRoute),
    /// Operations under `/api/products`.
    Products(ProductsRoute),
    /// No rule matched. Every unclassifiable request lands here; the
    /// matcher never fails.
    NotFound,
}

/// User sub-operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersRoute {
    /// `GET /api/users`
    List,
    /// `GET /api/users/{id}` with an integer id.
    ById(i64),
    /// `POST /api/users`
    Create,
    /// `PUT /api/users/{id}` with an integer id.
    Update(i64),
    /// `GET /api/users/search/{email}` with an email-shaped segment.
    Search(String),
}

/// Product sub-operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductsRoute {
    /// `GET /api/products`
    List,
    /// `GET /api/products/{id}` with a UUID id.
    ById(Uuid),
    /// `POST /api/products`
    Create,
    /// `PUT /api/products/{id}` with a UUID id.
    Update(Uuid),
    /// `GET /api/products/search/{term}`
    Search(String),
}

impl ApiRoute {
    /// A stable operation label for logging and metrics.
    #[must_use]
    pub fn operation_id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Health => "healthCheck",
            Self::Users(UsersRoute::List) => "listUsers",
            Self::Users(UsersRoute::ById(_)) => "getUser",
            Self::Users(UsersRoute::Create) => "createUser",
            Self::Users(UsersRoute::Update(_)) => "updateUser",
            Self::Users(UsersRoute::Search(_)) => "searchUsers",
            Self::Products(ProductsRoute::List) => "listProducts",
            Self::Products(ProductsRoute::ById(_)) => "getProduct",
            Self::Products(ProductsRoute::Create) => "createProduct",
            Self::Products(ProductsRoute::Update(_)) => "updateProduct",
            Self::Products(ProductsRoute::Search(_)) => "searchProducts",
            Self::NotFound => "notFound",
        }
    }
}
