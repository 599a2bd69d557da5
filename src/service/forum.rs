//! Store-backed forum operations.

use crate::error::ModelError;
use crate::models::Forum;
use crate::store::ForumStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct ForumModel {
    store: Arc<dyn ForumStore>,
}

impl ForumModel {
    pub fn new(store: Arc<dyn ForumStore>) -> Self {
        Self { store }
    }

    /// Insert a validated forum. Assigned id, created_at and version are written back.
    pub async fn insert(&self, forum: &mut Forum) -> Result<(), ModelError> {
        self.store.insert(forum).await?;
        tracing::info!(id = forum.id, name = %forum.name, "forum created");
        Ok(())
    }

    /// Fetch one forum. Ids below 1 never reach the store.
    pub async fn get(&self, id: i64) -> Result<Forum, ModelError> {
        if id < 1 {
            return Err(ModelError::NotFound);
        }
        self.store.get(id).await
    }

    /// Persist edits and bump the version by one. Callers validate first.
    pub async fn update(&self, forum: &mut Forum) -> Result<(), ModelError> {
        if forum.id < 1 {
            return Err(ModelError::NotFound);
        }
        self.store.update(forum).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ModelError> {
        if id < 1 {
            return Err(ModelError::NotFound);
        }
        self.store.delete(id).await
    }

    pub async fn ping(&self) -> Result<(), ModelError> {
        self.store.ping().await
    }
}
