use thiserror::Error;

/// Errors returned by link store backends.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// A record with the same id is already stored.
    #[error("link id already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors surfaced to callers of the allocator.
#[derive(Debug, Clone, Error)]
pub enum AllocError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    #[error("identifier already in use: {0}")]
    IdentifierTaken(String),
    #[error("no free identifier found after {attempts} attempts")]
    Exhausted { attempts: usize },
    #[error("link not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AllocError {
    /// Whether the error was caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AllocError::InvalidIdentifier(_)
                | AllocError::InvalidTarget(_)
                | AllocError::IdentifierTaken(_)
                | AllocError::NotFound(_)
        )
    }
}
