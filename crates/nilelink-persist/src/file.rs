//! JSON-file-backed decision store
//!
//! The entire memory map is serialized and rewritten after every mutation,
//! so the snapshot on disk always reflects the latest in-memory state. A
//! missing or corrupt snapshot degrades to an empty map at open time.

use crate::memory::DEFAULT_CAP;
use crate::store::{push_capped, DecisionStore, MemoryEntry, MemoryKey, MemoryMap, StoreError};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Durable store writing the whole map to one JSON file per mutation
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    cap: usize,
    entries: RwLock<MemoryMap>,
}

impl JsonFileStore {
    /// Open a store at `path` with the default per-key cap
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_cap(path, DEFAULT_CAP).await
    }

    /// Open a store at `path`, loading any existing snapshot
    pub async fn open_with_cap(path: impl Into<PathBuf>, cap: usize) -> Self {
        let path = path.into();
        let map = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<MemoryMap>(&bytes) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "unreadable memory snapshot, starting empty"
                    );
                    MemoryMap::new()
                }
            },
            Err(_) => MemoryMap::new(),
        };

        Self {
            path,
            cap,
            entries: RwLock::new(map),
        }
    }

    async fn persist(&self, map: &MemoryMap) -> Result<(), StoreError> {
        let json = serde_json::to_vec(map)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl DecisionStore for JsonFileStore {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn append(&self, entry: MemoryEntry) -> Result<(), StoreError> {
        let mut map = self.entries.write().await;
        push_capped(&mut map, entry, self.cap);
        // Persist while holding the write lock so the snapshot cannot
        // interleave with another mutation
        self.persist(&map).await
    }

    async fn entries(&self, key: &MemoryKey) -> Result<Vec<MemoryEntry>, StoreError> {
        let map = self.entries.read().await;
        Ok(map
            .get(key)
            .map(|bucket| bucket.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn find_by_request_id(
        &self,
        request_id: &str,
    ) -> Result<Option<MemoryEntry>, StoreError> {
        let map = self.entries.read().await;
        Ok(map
            .values()
            .flatten()
            .find(|entry| entry.request_id == request_id)
            .cloned())
    }

    async fn clear(&self, key: &MemoryKey) -> Result<bool, StoreError> {
        let mut map = self.entries.write().await;
        if map.remove(key).is_none() {
            return Ok(false);
        }
        self.persist(&map).await?;
        Ok(true)
    }
}
