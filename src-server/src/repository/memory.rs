//! In-Memory Repository
//!
//! An ordered `Vec` behind one async mutex. Every operation takes the lock,
//! so writes are applied one at a time in arrival order. Contents are lost
//! on restart.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::traits::{PatchableRepository, Repository};
use crate::domain::{DomainError, DomainResult, Entity, Patchable};

pub struct InMemoryRepository<T> {
    rows: Mutex<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<T>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &impl std::fmt::Display) -> DomainError {
    DomainError::NotFound(format!("no record with id {id}"))
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, entity: &T) -> DomainResult<T> {
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|row| row.id() == entity.id()) {
            return Err(DomainError::Conflict(format!("id {} already exists", entity.id())));
        }
        rows.push(entity.clone());
        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<T>> {
        Ok(self.rows.lock().await.clone())
    }

    async fn update(&self, entity: &T) -> DomainResult<T> {
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id() == entity.id())
            .ok_or_else(|| not_found(entity.id()))?;
        *row = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: &T::Id) -> DomainResult<()> {
        let mut rows = self.rows.lock().await;
        let index = rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or_else(|| not_found(id))?;
        rows.remove(index);
        Ok(())
    }
}

#[async_trait]
impl<T: Patchable> PatchableRepository<T> for InMemoryRepository<T> {
    async fn patch(&self, id: &T::Id, patch: &T::Patch) -> DomainResult<T> {
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| not_found(id))?;
        row.apply_patch(patch);
        Ok(row.clone())
    }
}
