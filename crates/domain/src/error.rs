//! Unified error types for the domain layer
//!
//! Every record rule that can reject input reports through [`DomainError`],
//! so the layers above can map it to a single "invalid argument" outcome
//! without inspecting strings.

use thiserror::Error;
use validator::ValidationErrors;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Identifier is missing or has the wrong shape
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Creates a validation error for field rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if book.title.is_empty() {
    ///     return Err(DomainError::validation("title is required"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| match &error.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: failed '{}' check", error.code),
                })
            })
            .collect();
        // HashMap iteration order is unstable; keep messages deterministic.
        messages.sort();
        Self::Validation(messages.join("; "))
    }
}
