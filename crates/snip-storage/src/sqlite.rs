use crate::sql::{is_unique_violation, map_sqlx_error, LinkRow};
use async_trait::async_trait;
use snip_core::repository::{ReadRepository, Repository, Result};
use snip_core::{Link, LinkId, StorageError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::debug;

const SCHEMA: &str = include_str!("../ddl/sqlite/links.sql");

/// SQLite implementation of the repository contract.
///
/// The `links.id` primary key is the uniqueness constraint: inserts are a
/// single `INSERT` and a key violation is reported as a conflict.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Creates a repository from an existing SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens `database_url`, creating the database file if it is missing.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(map_sqlx_error)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;
        debug!(database_url, "connected to sqlite");
        Ok(Self::new(pool))
    }

    /// Opens a private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the
    /// pool is pinned to one connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `links` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ReadRepository for SqliteRepository {
    async fn get(&self, id: &LinkId) -> Result<Option<Link>> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, target, creation_date, creator_ip
            FROM links
            WHERE id = ?
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(LinkRow::into_link).transpose()
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn insert_if_absent(&self, link: Link) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO links (id, target, creation_date, creator_ip)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(link.id.as_str())
        .bind(&link.target)
        .bind(link.creation_date.as_microsecond())
        .bind(&link.creator_ip)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(StorageError::Conflict(link.id.into_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn delete(&self, id: &LinkId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
