//! Validator primitives.

/// A business exception: a human-readable message (via `Display`) plus a
/// stable machine-checkable code such as `"PROPOSITION-57"`.
pub trait BusinessException: std::error::Error {
    /// Stable code identifying the kind of violation.
    fn status_code(&self) -> &'static str;
}

/// A single-purpose business rule.
///
/// Implementors hold the exact inputs the rule needs and nothing else.
/// `validate` is pure: it never mutates anything and may be called any
/// number of times with the same outcome.
pub trait BusinessValidator<E> {
    /// Check the rule, returning the one exception that describes the
    /// violation.
    fn validate(&self) -> Result<(), E>;
}
