//! Simulated downstream data store.
//!
//! Stands in for the data service a deployed worker would call. Lookups
//! are async so handlers exercise a real suspension point, but resolve
//! immediately from fixed sample data; persistence is out of scope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// A product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

/// Identifier of the sample "Enamel mug" product.
pub const MUG_ID: Uuid = Uuid::from_u128(0x0192_3a1e_4c6f_7a00_8000_0000_0000_0001);

/// Identifier of the sample "Travel kettle" product.
pub const KETTLE_ID: Uuid = Uuid::from_u128(0x0192_3a1e_4c6f_7a00_8000_0000_0000_0002);

fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
        },
    ]
}

fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: MUG_ID,
            name: "Enamel mug".to_string(),
            price: 12.5,
        },
        Product {
            id: KETTLE_ID,
            name: "Travel kettle".to_string(),
            price: 39.0,
        },
    ]
}

// Models the await the real downstream call would impose.
async fn simulated_latency() {
    tokio::task::yield_now().await;
}

/// Lists all users.
pub async fn list_users() -> Vec<User> {
    simulated_latency().await;
    sample_users()
}

/// Finds a user by exact email.
pub async fn find_user_by_email(email: &str) -> Option<User> {
    simulated_latency().await;
    sample_users().into_iter().find(|user| user.email == email)
}

/// Lists all products.
pub async fn list_products() -> Vec<Product> {
    simulated_latency().await;
    sample_products()
}

/// Finds a product by identifier.
pub async fn find_product(id: Uuid) -> Option<Product> {
    simulated_latency().await;
    sample_products().into_iter().find(|product| product.id == id)
}
