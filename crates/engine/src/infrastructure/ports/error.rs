//! Error types for store operations.

/// Store operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Record not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A record with this identifier is already stored.
    #[error("{entity_type} already exists: {id}")]
    DuplicateKey {
        entity_type: &'static str,
        id: String,
    },

    /// Backing medium unreachable, closed, or not yet initialized.
    #[error("Store unavailable in {operation}: {message}")]
    Unavailable {
        operation: &'static str,
        message: String,
    },

    /// Any other driver failure - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },
}

impl StoreError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a DuplicateKey error with entity type and ID context.
    pub fn duplicate(entity_type: &'static str, id: impl ToString) -> Self {
        Self::DuplicateKey {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn unavailable(operation: &'static str, message: impl ToString) -> Self {
        Self::Unavailable {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
