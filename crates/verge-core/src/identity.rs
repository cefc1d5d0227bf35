//! Caller identity.
//!
//! The auth middleware stage populates an [`AuthenticatedUser`] on the
//! request context when the caller presents credentials. Requests without
//! credentials simply carry no user; whether that is acceptable is the auth
//! stage's decision, not the identity type's.

use serde::{Deserialize, Serialize};

/// The authenticated caller of a request.
///
/// Verge performs a shape check on the credential only; actual token
/// validation belongs to the hosting platform, so the fields here are
/// whatever that platform attested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Stable identifier of the user.
    pub user_id: String,
    /// Email address, when the credential carries one.
    pub email: Option<String>,
    /// Display name, when the credential carries one.
    pub name: Option<String>,
    /// Roles granted to the user.
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Creates a user with the given identifier and no optional attributes.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
            name: None,
            roles: Vec::new(),
        }
    }

    /// Returns the user with the email set.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns the user with the display name set.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the user with a role appended.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Returns an identifier suitable for logging.
    ///
    /// Never includes credentials or other sensitive material.
    #[must_use]
    pub fn log_id(&self) -> String {
        format!("user:{}", self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let user = AuthenticatedUser::new("u-7")
            .with_email("alice@example.com")
            .with_name("Alice")
            .with_role("admin");

        assert_eq!(user.user_id, "u-7");
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
        assert_eq!(user.name.as_deref(), Some("Alice"));
        assert_eq!(user.roles, vec!["admin".to_string()]);
    }

    #[test]
    fn test_log_id() {
        let user = AuthenticatedUser::new("u-7");
        assert_eq!(user.log_id(), "user:u-7");
    }
}
