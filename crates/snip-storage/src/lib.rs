//! Link store backends.
//!
//! - [`InMemoryRepository`]: DashMap, not durable.
//! - [`SqliteRepository`]: single-file SQLite database.
//! - [`MySqlRepository`]: shared MySQL server.
//!
//! All of them implement [`Repository`], whose `insert_if_absent` is the
//! only primitive the allocator relies on for uniqueness.

pub mod memory;
pub mod mysql;
mod sql;
pub mod sqlite;

pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use snip_core::repository::{ReadRepository, Repository};
pub use snip_core::StorageError;
pub use sqlite::SqliteRepository;
