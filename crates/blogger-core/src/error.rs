//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::validation::ValidationError;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input rejected before touching storage.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
