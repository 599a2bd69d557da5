//! Persistence backends for forums.
//! Every call returns `ModelError::NotFound` or `ModelError::Store` on failure; callers never inspect driver errors.

mod memory;
mod postgres;

pub use memory::MemoryForumStore;
pub use postgres::PgForumStore;

use crate::error::ModelError;
use crate::models::Forum;
use async_trait::async_trait;

#[async_trait]
pub trait ForumStore: Send + Sync {
    /// Writes a new row and copies the assigned id, created_at and version back into `forum`.
    async fn insert(&self, forum: &mut Forum) -> Result<(), ModelError>;

    async fn get(&self, id: i64) -> Result<Forum, ModelError>;

    /// Overwrites the editable fields and bumps the version in one statement.
    /// The new version is copied back into `forum`.
    async fn update(&self, forum: &mut Forum) -> Result<(), ModelError>;

    async fn delete(&self, id: i64) -> Result<(), ModelError>;

    /// Cheap connectivity check used by `/ready`.
    async fn ping(&self) -> Result<(), ModelError>;
}
