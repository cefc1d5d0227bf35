//! Field validation building blocks.
//!
//! Small pure checks that handlers assemble with [`combine`] (to report
//! every problem at once) or [`Outcome::bind`] (to gate later work on an
//! earlier value). The dispatcher never calls these directly.
//!
//! [`combine`]: crate::outcome::combine
//! [`Outcome::bind`]: crate::outcome::Outcome::bind

use crate::outcome::Outcome;

/// Requires a non-blank string value.
///
/// Fails with `"<field> is required"` on empty or whitespace-only input.
pub fn required(field: &str, value: &str) -> Outcome<String> {
    if value.trim().is_empty() {
        Outcome::validation(format!("{field} is required"))
    } else {
        Outcome::Success(value.to_string())
    }
}

/// Requires an email-shaped string.
///
/// Deliberately permissive: the only check is the presence of an `@`.
/// Full address-grammar validation belongs to whatever system actually
/// delivers mail.
pub fn email_shape(value: &str) -> Outcome<String> {
    if value.contains('@') {
        Outcome::Success(value.to_string())
    } else {
        Outcome::validation("Invalid email format")
    }
}

/// Requires a strictly positive number.
///
/// Fails with `"<field> must be positive"` on zero or negative input.
pub fn positive(field: &str, value: f64) -> Outcome<f64> {
    if value > 0.0 {
        Outcome::Success(value)
    } else {
        Outcome::validation(format!("{field} must be positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::combine;

    #[test]
    fn test_required_accepts_non_blank() {
        assert_eq!(required("name", "Alice"), Outcome::Success("Alice".to_string()));
    }

    #[test]
    fn test_required_rejects_empty_and_blank() {
        let expected = Outcome::ValidationError(vec!["name is required".to_string()]);
        assert_eq!(required("name", ""), expected);
        assert_eq!(required("name", "   "), expected);
    }

    #[test]
    fn test_email_shape_only_checks_for_at_sign() {
        assert!(email_shape("a@b").is_success());
        assert!(email_shape("weird@@still-fine").is_success());
        assert_eq!(
            email_shape("no-at-sign"),
            Outcome::ValidationError(vec!["Invalid email format".to_string()])
        );
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive("price", 0.01), Outcome::Success(0.01));
        assert_eq!(
            positive("price", 0.0),
            Outcome::ValidationError(vec!["price must be positive".to_string()])
        );
        assert_eq!(
            positive("price", -3.5),
            Outcome::ValidationError(vec!["price must be positive".to_string()])
        );
    }

    #[test]
    fn test_helpers_aggregate_through_combine() {
        let checks = combine(vec![required("name", ""), email_shape("not-an-email")]);
        assert_eq!(
            checks,
            Outcome::ValidationError(vec![
                "name is required".to_string(),
                "Invalid email format".to_string(),
            ])
        );
    }
}
