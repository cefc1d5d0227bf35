//! Railway-oriented outcome type.
//!
//! Every step of the pipeline (middleware, validation helpers, the inner
//! pipelines of handlers) produces an [`Outcome`]. Composition happens
//! through exactly two primitives with deliberately different failure
//! disciplines:
//!
//! - [`Outcome::bind`] chains dependent steps and stops at the first
//!   failure (fail-fast);
//! - [`combine`] aggregates independent checks and collects *every*
//!   failure message (fail-slow), so a client sees all field problems at
//!   once instead of one per round trip.

/// The result of a pipeline step.
///
/// Exactly one variant is populated; consumers match exhaustively. The
/// failure variants map to fixed HTTP statuses at the edge of the pipeline
/// (400, 404, 401) and are never thrown; `bind` and `compose` are the only
/// propagation mechanisms.
///
/// # Example
///
/// ```
/// use verge_core::Outcome;
///
/// fn half(n: i64) -> Outcome<i64> {
///     if n % 2 == 0 {
///         Outcome::Success(n / 2)
///     } else {
///         Outcome::validation("expected an even number")
///     }
/// }
///
/// let outcome = Outcome::Success(12).bind(half).bind(half);
/// assert_eq!(outcome, Outcome::Success(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The step succeeded and produced a value.
    Success(T),
    /// Input validation failed; carries one message per violated rule,
    /// in the order the rules were checked.
    ValidationError(Vec<String>),
    /// A referenced resource or route does not exist.
    NotFound(String),
    /// The caller is not authorized for this request.
    Unauthorized(String),
}

impl<T> Outcome<T> {
    /// Creates a `ValidationError` carrying a single message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(vec![message.into()])
    }

    /// Creates a `NotFound` failure.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates an `Unauthorized` failure.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Returns `true` for the `Success` variant.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Sequentially composes this outcome with `f`.
    ///
    /// `f` is evaluated only when `self` is `Success`; any failure variant
    /// passes through unchanged and `f` is never called. This is the sole
    /// sequential composition primitive; middleware chains and handler
    /// pipelines are built entirely from `bind`.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Success(value) => f(value),
            Self::ValidationError(messages) => Outcome::ValidationError(messages),
            Self::NotFound(message) => Outcome::NotFound(message),
            Self::Unauthorized(message) => Outcome::Unauthorized(message),
        }
    }

    /// Transforms the success value, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        self.bind(|value| Outcome::Success(f(value)))
    }
}

/// Aggregates a sequence of independent outcomes.
///
/// If every element is `Success`, returns `Success` of the values in their
/// original order. Otherwise returns a `ValidationError` whose message list
/// is the concatenation, in input order, of every failure's messages, not
/// just the first. A `NotFound` or `Unauthorized` element contributes its
/// single message.
///
/// Unlike [`Outcome::bind`], which stops at the first failure, `combine`
/// inspects every element; independent field checks must report all
/// problems.
///
/// # Example
///
/// ```
/// use verge_core::{combine, Outcome};
///
/// let checks = vec![
///     Outcome::validation("name is required"),
///     Outcome::Success("a@b.c".to_string()),
///     Outcome::validation("age must be positive"),
/// ];
/// assert_eq!(
///     combine(checks),
///     Outcome::ValidationError(vec![
///         "name is required".to_string(),
///         "age must be positive".to_string(),
///     ]),
/// );
/// ```
pub fn combine<T>(outcomes: Vec<Outcome<T>>) -> Outcome<Vec<T>> {
    let mut values = Vec::with_capacity(outcomes.len());
    let mut messages = Vec::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::ValidationError(errors) => messages.extend(errors),
            Outcome::NotFound(message) | Outcome::Unauthorized(message) => {
                messages.push(message);
            }
        }
    }

    if messages.is_empty() {
        Outcome::Success(values)
    } else {
        Outcome::ValidationError(messages)
    }
}
