//! Domain Layer - Core Entity Trait
//!
//! Basic contract for everything a repository can hold.

use std::fmt;
use std::hash::Hash;

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone + 'static {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash + fmt::Display + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Entities that accept a partial update.
pub trait Patchable: Entity {
    type Patch: Send + Sync;

    fn apply_patch(&mut self, patch: &Self::Patch);
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid credentials")]
    Unauthorized,
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
