//! Domain Layer - Core Entity Trait
//!
//! Every record the shell displays has a stable string id.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone + Send + Sync {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Internal error: {0}")]
    Internal(String),
}
