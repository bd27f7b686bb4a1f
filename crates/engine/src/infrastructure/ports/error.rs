//! Error types for port operations.

/// Document store errors with context for debugging.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepoError {
    /// Store operation failed (network, auth, quota, I/O) - includes operation name for tracing.
    #[error("Store error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A stored document does not decode into the expected shape.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A conditional write lost against a concurrent writer.
    #[error("Write conflict on {collection}/{id}")]
    Conflict { collection: String, id: String },
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Create a Conflict error for a failed precondition.
    pub fn conflict(collection: &str, id: impl ToString) -> Self {
        Self::Conflict {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    /// Check if this is a Conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// The store could not be reached; the same request may succeed later.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Database { .. })
    }
}
