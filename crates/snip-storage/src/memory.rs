use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use snip_core::repository::{ReadRepository, Repository, Result};
use snip_core::{Link, LinkId, StorageError};

/// In-memory implementation of the repository contract using DashMap.
///
/// Inserts go through the entry API, which holds the shard lock between the
/// existence check and the write. Nothing survives a restart, so this is
/// meant for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<LinkId, Link>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, id: &LinkId) -> Result<Option<Link>> {
        Ok(self.storage.get(id).map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert_if_absent(&self, link: Link) -> Result<()> {
        match self.storage.entry(link.id.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(link.id.into_string())),
            Entry::Vacant(slot) => {
                slot.insert(link);
                Ok(())
            }
        }
    }

    async fn delete(&self, id: &LinkId) -> Result<bool> {
        Ok(self.storage.remove(id).is_some())
    }
}
