use std::result::Result as StdResult;
use thiserror::Error;

/// Errors that can occur while managing test containers.
#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("container error: {0}")]
    Container(#[from] testcontainers::TestcontainersError),

    #[error("database did not accept connections after {attempts} attempts: {source}")]
    NotReady {
        attempts: usize,
        #[source]
        source: sqlx::Error,
    },
}

/// A type alias for `Result` with `TestInfraError`.
pub type Result<T> = StdResult<T, TestInfraError>;
