//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! The only implementation today is in-memory; a real datastore plugs in
//! behind the same traits.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity, Patchable};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Store a new entity. Fails with `Conflict` if the id is taken.
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// List all entities in insertion order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Replace an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: &T::Id) -> DomainResult<()>;
}

/// Extension for repositories that can merge a partial update in one step,
/// so a read-modify-write never interleaves with another writer.
#[async_trait]
pub trait PatchableRepository<T: Patchable>: Repository<T> {
    async fn patch(&self, id: &T::Id, patch: &T::Patch) -> DomainResult<T>;
}
