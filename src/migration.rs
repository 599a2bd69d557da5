//! Database bootstrap: create the target database and the `forums` table when missing.

use crate::error::ModelError;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const FORUMS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS forums (
        id BIGSERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        name TEXT NOT NULL,
        level TEXT NOT NULL,
        contact TEXT NOT NULL,
        phone TEXT NOT NULL,
        email TEXT NOT NULL,
        website TEXT NOT NULL,
        address TEXT NOT NULL,
        mode TEXT[] NOT NULL,
        version INTEGER NOT NULL DEFAULT 1
    )
"#;

const MODE_CHECK_DDL: &str = r#"
    DO $$
    BEGIN
        IF NOT EXISTS (SELECT 1 FROM pg_constraint WHERE conname = 'forums_mode_length_check') THEN
            ALTER TABLE forums
                ADD CONSTRAINT forums_mode_length_check
                CHECK (array_length(mode, 1) BETWEEN 1 AND 5);
        END IF;
    END
    $$
"#;

/// Create the `forums` table and its mode-length constraint. Idempotent.
pub async fn ensure_forums_table(pool: &PgPool) -> Result<(), ModelError> {
    tracing::debug!(sql = %FORUMS_DDL, "migration");
    sqlx::query(FORUMS_DDL).execute(pool).await?;
    sqlx::query(MODE_CHECK_DDL).execute(pool).await?;
    Ok(())
}

/// Connect to the server's `postgres` database and create the database named in `database_url` if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), ModelError> {
    let (admin_url, db_name) = split_database_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn split_database_url(url: &str) -> Result<(String, String), ModelError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .rfind('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ModelError::Store("DATABASE_URL: no database name".into()))?;
    let (base, path_and_query) = url.split_at(path_start);
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim().to_string();
    let admin_url = match parts.next() {
        Some(query) => format!("{}postgres?{}", base, query),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
