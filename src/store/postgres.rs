//! PostgreSQL-backed forum store.

use super::ForumStore;
use crate::error::ModelError;
use crate::models::Forum;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

const INSERT_SQL: &str = r#"
    INSERT INTO forums (name, level, contact, phone, email, website, address, mode)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    RETURNING id, created_at, version
"#;

const SELECT_BY_ID_SQL: &str = r#"
    SELECT id, created_at, name, level, contact, phone, email, website, address, mode, version
    FROM forums
    WHERE id = $1
"#;

const UPDATE_SQL: &str = r#"
    UPDATE forums
    SET name = $1, level = $2, contact = $3,
        phone = $4, email = $5, website = $6,
        address = $7, mode = $8, version = version + 1
    WHERE id = $9
    RETURNING version
"#;

const DELETE_SQL: &str = "DELETE FROM forums WHERE id = $1";

#[derive(Clone)]
pub struct PgForumStore {
    pool: PgPool,
}

impl PgForumStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ForumStore for PgForumStore {
    async fn insert(&self, forum: &mut Forum) -> Result<(), ModelError> {
        tracing::debug!(sql = %INSERT_SQL, name = %forum.name, "query");
        let (id, created_at, version): (i64, DateTime<Utc>, i32) = sqlx::query_as(INSERT_SQL)
            .bind(&forum.name)
            .bind(&forum.level)
            .bind(&forum.contact)
            .bind(&forum.phone)
            .bind(&forum.email)
            .bind(&forum.website)
            .bind(&forum.address)
            .bind(&forum.mode)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ModelError::Store(e.to_string()))?;
        forum.id = id;
        forum.created_at = created_at;
        forum.version = version;
        Ok(())
    }

    async fn get(&self, id: i64) -> Result<Forum, ModelError> {
        tracing::debug!(sql = %SELECT_BY_ID_SQL, id, "query");
        sqlx::query_as::<_, Forum>(SELECT_BY_ID_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ModelError::NotFound)
    }

    async fn update(&self, forum: &mut Forum) -> Result<(), ModelError> {
        tracing::debug!(sql = %UPDATE_SQL, id = forum.id, "query");
        let row: Option<(i32,)> = sqlx::query_as(UPDATE_SQL)
            .bind(&forum.name)
            .bind(&forum.level)
            .bind(&forum.contact)
            .bind(&forum.phone)
            .bind(&forum.email)
            .bind(&forum.website)
            .bind(&forum.address)
            .bind(&forum.mode)
            .bind(forum.id)
            .fetch_optional(&self.pool)
            .await?;
        let (version,) = row.ok_or(ModelError::NotFound)?;
        forum.version = version;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ModelError> {
        tracing::debug!(sql = %DELETE_SQL, id, "query");
        let result = sqlx::query(DELETE_SQL).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(ModelError::NotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), ModelError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
