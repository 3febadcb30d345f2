//! Repository Layer
//!
//! Read-only data access for the shell. The shipped implementation serves
//! static fixtures; a backend-backed source can implement the same trait
//! without touching the query or layout code.

use crate::domain::{DomainResult, Entity};

/// Read-only repository over one entity type
pub trait ReadRepository<T: Entity>: Send + Sync {
    /// List all entities in source order
    fn list(&self) -> DomainResult<Vec<T>>;

    /// Find entity by ID
    fn find_by_id(&self, id: &str) -> DomainResult<Option<T>> {
        Ok(self.list()?.into_iter().find(|entity| entity.id() == id))
    }
}

/// In-memory repository over a fixed list
#[derive(Debug, Clone)]
pub struct StaticRepository<T> {
    entries: Vec<T>,
}

impl<T> StaticRepository<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }
}

impl<T: Entity> ReadRepository<T> for StaticRepository<T> {
    fn list(&self) -> DomainResult<Vec<T>> {
        Ok(self.entries.clone())
    }
}
