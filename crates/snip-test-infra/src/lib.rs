//! Disposable backing services for integration tests.
//!
//! Requires a running Docker daemon.

pub mod error;
pub mod mysql;

pub use error::{Result, TestInfraError};
