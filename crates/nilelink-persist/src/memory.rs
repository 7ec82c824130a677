//! In-memory decision store

use crate::store::{push_capped, DecisionStore, MemoryEntry, MemoryKey, MemoryMap, StoreError};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Default per-key history cap
pub const DEFAULT_CAP: usize = 100;

/// Volatile store backed by a locked map
///
/// The write lock makes append/cap/evict atomic per call; suitable for
/// tests and single-process deployments that do not need durability.
#[derive(Debug)]
pub struct InMemoryStore {
    cap: usize,
    entries: RwLock<MemoryMap>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Store with the default per-key cap
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Store with an explicit per-key cap
    pub fn with_cap(cap: usize) -> Self {
        Self {
            cap,
            entries: RwLock::new(MemoryMap::new()),
        }
    }
}

#[async_trait]
impl DecisionStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn append(&self, entry: MemoryEntry) -> Result<(), StoreError> {
        let mut map = self.entries.write().await;
        push_capped(&mut map, entry, self.cap);
        Ok(())
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
        Ok(map.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nilelink_core::{
        DecisionResult, InventorySignal, RiskLevel, TransactionData, UserContext,
    };
    use std::collections::BTreeMap;

    fn entry(request_id: &str) -> MemoryEntry {
        let context = UserContext::default().resolve();
        let result = DecisionResult {
            decision: nilelink_core::Decision::Approve,
            risk_level: RiskLevel::Low,
            concerns: Vec::new(),
            recommendations: Vec::new(),
            negotiation_log: Vec::new(),
            agent_insights: BTreeMap::new(),
            inventory_signal: InventorySignal::Stable,
            context: context.clone(),
            future_simulations: None,
        };
        MemoryEntry::new(
            request_id.to_string(),
            context,
            TransactionData::default(),
            result,
        )
    }

    #[tokio::test]
    async fn test_append_and_read_back() {
        let store = InMemoryStore::new();
        store.append(entry("req_1")).await.unwrap();

        let key = MemoryKey::new("customer", "marketplace");
        let entries = store.entries(&key).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].request_id, "req_1");
    }

    #[tokio::test]
    async fn test_cap_evicts_oldest_first() {
        let store = InMemoryStore::with_cap(3);
        for i in 0..5 {
            store.append(entry(&format!("req_{i}"))).await.unwrap();
        }

        let key = MemoryKey::new("customer", "marketplace");
        let entries = store.entries(&key).await.unwrap();

        let ids: Vec<_> = entries.iter().map(|e| e.request_id.as_str()).collect();
        assert_eq!(ids, vec!["req_2", "req_3", "req_4"]);
    }

    #[tokio::test]
    async fn test_find_by_request_id() {
        let store = InMemoryStore::new();
        store.append(entry("req_a")).await.unwrap();
        store.append(entry("req_b")).await.unwrap();

        let found = store.find_by_request_id("req_b").await.unwrap();
        assert_eq!(found.unwrap().request_id, "req_b");

        assert!(store.find_by_request_id("req_z").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_reports_existence() {
        let store = InMemoryStore::new();
        store.append(entry("req_1")).await.unwrap();

        let key = MemoryKey::new("customer", "marketplace");
        assert!(store.clear(&key).await.unwrap());
        assert!(!store.clear(&key).await.unwrap());
        assert!(store.entries(&key).await.unwrap().is_empty());
    }
}
