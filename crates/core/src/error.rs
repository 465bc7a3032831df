//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: callers report it and carry on. Input that
/// never made it to a typed value (non-numeric text and the like) belongs to
/// the presentation layer and has no variant here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value would break a record invariant (e.g. negative quantity).
    #[error("invalid {field}: {value} (must not be negative)")]
    InvalidValue { field: &'static str, value: String },

    /// A record with this identifier already exists.
    #[error("a product with id '{0}' already exists")]
    DuplicateId(String),

    /// No record matches this identifier.
    #[error("product '{0}' not found")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_value(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Stable, machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::InvalidValue { .. } => "invalid_value",
            DomainError::DuplicateId(_) => "duplicate_id",
            DomainError::NotFound(_) => "not_found",
        }
    }
}
