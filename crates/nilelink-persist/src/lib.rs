//! # NileLink Persist
//!
//! Decision memory for the NileLink AI core: a bounded FIFO history per
//! `(role, system_state)` key, behind an injectable [`DecisionStore`]
//! trait.
//!
//! Backends:
//! - [`InMemoryStore`] — volatile, for tests and single-process use
//! - [`JsonFileStore`] — rewrites the whole map to one JSON file on every
//!   mutation, so the snapshot always matches memory
//!
//! ## Quick Start
//!
//! ```rust
//! use nilelink_persist::{DecisionStore, InMemoryStore, MemoryKey};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = InMemoryStore::new();
//! let key = MemoryKey::new("customer", "marketplace");
//! assert!(store.entries(&key).await.unwrap().is_empty());
//! # }
//! ```

pub mod file;
pub mod memory;
pub mod store;

pub use file::JsonFileStore;
pub use memory::{InMemoryStore, DEFAULT_CAP};
pub use store::{DecisionStore, MemoryEntry, MemoryKey, StoreError};
