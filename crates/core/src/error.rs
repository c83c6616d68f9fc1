//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The filter pipeline performs no IO, so the only failures are broken
/// catalog data and malformed identifiers coming from user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Catalog data broke a referential or uniqueness invariant
    /// (dangling foreign key, duplicate identifier).
    #[error("data integrity violation: {0}")]
    DataIntegrity(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// A record points at an identifier that does not exist.
    pub fn dangling(
        from_kind: &str,
        from_id: impl core::fmt::Display,
        to_kind: &str,
        to_id: impl core::fmt::Display,
    ) -> Self {
        Self::DataIntegrity(format!(
            "{from_kind} {from_id} references missing {to_kind} {to_id}"
        ))
    }

    pub fn duplicate(kind: &str, id: impl core::fmt::Display) -> Self {
        Self::DataIntegrity(format!("duplicate {kind} id {id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_message_names_both_ends() {
        let err = DomainError::dangling("product", 7, "category", 42);
        assert_eq!(
            err.to_string(),
            "data integrity violation: product 7 references missing category 42"
        );
    }

    #[test]
    fn duplicate_message() {
        let err = DomainError::duplicate("user", 3);
        assert!(matches!(err, DomainError::DataIntegrity(ref m) if m == "duplicate user id 3"));
    }
}
