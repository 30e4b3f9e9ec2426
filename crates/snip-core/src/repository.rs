use crate::error::StorageError;
use crate::link::Link;
use crate::link_id::LinkId;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a link store.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the link stored under `id`.
    /// Returns `None` if the id does not exist.
    async fn get(&self, id: &LinkId) -> Result<Option<Link>>;
}

/// A link store that enforces one record per id.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts `link` if and only if no record with `link.id` exists.
    ///
    /// Returns `Err(StorageError::Conflict)` and leaves the store unchanged
    /// otherwise. The existence check and the insert must be a single atomic
    /// step: of several concurrent inserts for one id, exactly one succeeds.
    async fn insert_if_absent(&self, link: Link) -> Result<()>;

    /// Deletes the link stored under `id`.
    /// Returns `true` if the record existed and was removed.
    async fn delete(&self, id: &LinkId) -> Result<bool>;
}
