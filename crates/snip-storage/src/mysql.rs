use crate::sql::{is_unique_violation, map_sqlx_error, LinkRow};
use async_trait::async_trait;
use snip_core::repository::{ReadRepository, Repository, Result};
use snip_core::{Link, LinkId, StorageError};
use sqlx::MySqlPool;
use tracing::debug;

const SCHEMA: &str = include_str!("../ddl/mysql/links.sql");

/// MySQL implementation of the repository contract.
///
/// The id column uses the binary NO PAD collation, so ids differing only in
/// case or in trailing spaces are distinct links. Deletes remove the row, which frees the id for reuse.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        debug!("connected to mysql");
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
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn get(&self, id: &LinkId) -> Result<Option<Link>> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, target, creation_date, creator_ip
            FROM links
            WHERE id = ?
            LIMIT 1
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
impl Repository for MySqlRepository {
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
        let result = sqlx::query(
            r#"
            DELETE FROM links
            WHERE id = ?
            "#,
        )
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
