//! Decision memory contract and entry types
//!
//! A store keeps one bounded FIFO history per `(role, system_state)` key.
//! Append, cap and persist happen as one atomic operation per call, so
//! concurrent writers cannot interleave a read-modify-write.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nilelink_core::{ContextData, DecisionResult, TransactionData};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;

/// Storage error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing file could not be read or written
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key addressing one bounded history: `"{role}_{system_state}"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryKey(String);

impl MemoryKey {
    /// Key for a role / system-state pair
    pub fn new(user_role: &str, system_state: &str) -> Self {
        Self(format!("{user_role}_{system_state}"))
    }

    /// The raw key string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One remembered decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Request id linking this entry to later feedback
    pub request_id: String,
    /// When the decision was made
    pub timestamp: DateTime<Utc>,
    /// The resolved context the decision was made under
    pub context: ContextData,
    /// The evaluated transaction
    pub data: TransactionData,
    /// The synthesized decision
    pub result: DecisionResult,
}

impl MemoryEntry {
    /// Entry stamped with the current time
    pub fn new(
        request_id: String,
        context: ContextData,
        data: TransactionData,
        result: DecisionResult,
    ) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
            context,
            data,
            result,
        }
    }

    /// The history key this entry files under
    pub fn key(&self) -> MemoryKey {
        MemoryKey::new(&self.context.user_role, &self.context.system_state)
    }
}

/// The full memory shape shared by every backend
pub(crate) type MemoryMap = HashMap<MemoryKey, VecDeque<MemoryEntry>>;

/// Push an entry under its key, evicting the oldest entries beyond `cap`
pub(crate) fn push_capped(map: &mut MemoryMap, entry: MemoryEntry, cap: usize) {
    let bucket = map.entry(entry.key()).or_default();
    bucket.push_back(entry);
    while bucket.len() > cap {
        bucket.pop_front();
    }
}

/// Bounded per-key decision history (object safe)
#[async_trait]
pub trait DecisionStore: Send + Sync + fmt::Debug {
    /// Backend name for diagnostics
    fn name(&self) -> &str;

    /// Append an entry under its key, evicting the oldest beyond the cap
    async fn append(&self, entry: MemoryEntry) -> Result<(), StoreError>;

    /// Every entry under a key, oldest first
    async fn entries(&self, key: &MemoryKey) -> Result<Vec<MemoryEntry>, StoreError>;

    /// Linear scan across every key for a request id
    async fn find_by_request_id(
        &self,
        request_id: &str,
    ) -> Result<Option<MemoryEntry>, StoreError>;

    /// Drop a key's history; returns whether the key existed
    async fn clear(&self, key: &MemoryKey) -> Result<bool, StoreError>;
}
