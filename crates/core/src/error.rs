//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is terminal for the single operation that raised it; the
/// ledger and the action log stay consistent and usable afterwards.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A value failed validation (e.g. a non-positive quantity).
    #[error("{0}")]
    Validation(String),

    /// The named item is not held.
    #[error("item '{0}' not found")]
    NotFound(String),

    /// More was requested than is held.
    #[error("not enough {name} to consume (requested {requested}, available {available})")]
    InsufficientQuantity {
        name: String,
        requested: f64,
        available: f64,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn insufficient(name: impl Into<String>, requested: f64, available: f64) -> Self {
        Self::InsufficientQuantity {
            name: name.into(),
            requested,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            DomainError::validation("quantity must be greater than zero").to_string(),
            "quantity must be greater than zero"
        );
        assert_eq!(DomainError::not_found("bread").to_string(), "item 'bread' not found");
        assert_eq!(
            DomainError::insufficient("milk", 3.0, 1.5).to_string(),
            "not enough milk to consume (requested 3, available 1.5)"
        );
    }
}
