//! Helpers shared by the sqlx-backed repositories.

use jiff::Timestamp;
use snip_core::{Link, LinkId, StorageError};

/// A row of the `links` table.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct LinkRow {
    id: String,
    target: String,
    creation_date: i64,
    creator_ip: String,
}

impl LinkRow {
    pub(crate) fn into_link(self) -> Result<Link, StorageError> {
        let id = LinkId::new(self.id)
            .map_err(|e| StorageError::InvalidData(format!("invalid stored id: {e}")))?;
        let creation_date = Timestamp::from_microsecond(self.creation_date).map_err(|e| {
            StorageError::InvalidData(format!(
                "invalid creation_date '{}': {e}",
                self.creation_date
            ))
        })?;

        Ok(Link {
            id,
            target: self.target,
            creation_date,
            creator_ip: self.creator_ip,
        })
    }
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

pub(crate) fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        sqlx::Error::Configuration(_) => StorageError::Operation(message),
        _ => StorageError::Query(message),
    }
}
