//! In-process forum store. Mirrors the table defaults: ids start at 1, versions start at 1.

use super::ForumStore;
use crate::error::ModelError;
use crate::models::Forum;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Default)]
struct Rows {
    last_id: i64,
    forums: BTreeMap<i64, Forum>,
}

#[derive(Default)]
pub struct MemoryForumStore {
    rows: RwLock<Rows>,
}

impl MemoryForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.read().forums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ForumStore for MemoryForumStore {
    async fn insert(&self, forum: &mut Forum) -> Result<(), ModelError> {
        let mut rows = self.rows.write();
        rows.last_id += 1;
        forum.id = rows.last_id;
        forum.created_at = Utc::now();
        forum.version = 1;
        rows.forums.insert(forum.id, forum.clone());
        Ok(())
    }

    async fn get(&self, id: i64) -> Result<Forum, ModelError> {
        self.rows
            .read()
            .forums
            .get(&id)
            .cloned()
            .ok_or(ModelError::NotFound)
    }

    async fn update(&self, forum: &mut Forum) -> Result<(), ModelError> {
        let mut rows = self.rows.write();
        let stored = rows.forums.get_mut(&forum.id).ok_or(ModelError::NotFound)?;
        stored.name = forum.name.clone();
        stored.level = forum.level.clone();
        stored.contact = forum.contact.clone();
        stored.phone = forum.phone.clone();
        stored.email = forum.email.clone();
        stored.website = forum.website.clone();
        stored.address = forum.address.clone();
        stored.mode = forum.mode.clone();
        stored.version += 1;
        forum.version = stored.version;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ModelError> {
        self.rows
            .write()
            .forums
            .remove(&id)
            .map(|_| ())
            .ok_or(ModelError::NotFound)
    }

    async fn ping(&self) -> Result<(), ModelError> {
        Ok(())
    }
}
