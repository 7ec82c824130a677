//! # NileLink AI
//!
//! The facade over the NileLink decision core. One [`NileLinkAi`] service
//! wires together:
//! - the eleven-agent [`DecisionOrchestrator`](nilelink_runtime::DecisionOrchestrator)
//! - the [`PolicyEthicsGuard`](nilelink_runtime::PolicyEthicsGuard) veto gate
//! - the [`FutureSimulationEngine`](nilelink_runtime::FutureSimulationEngine)
//! - the [`FraudModel`](nilelink_core::FraudModel) reinforcement loop
//! - an injected [`DecisionStore`](nilelink_persist::DecisionStore) memory
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use nilelink_ai::{AnalyzeRequest, NileLinkAi};
//! use nilelink_persist::InMemoryStore;
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let ai = NileLinkAi::new(Arc::new(InMemoryStore::new()));
//!
//! let envelope = ai
//!     .analyze_transaction(&AnalyzeRequest {
//!         data: json!({ "amount": 6000, "ipCountry": "US", "billingCountry": "EG" }),
//!         context: json!({ "role": "customer" }),
//!     })
//!     .await;
//!
//! assert!(envelope.success);
//! # }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod system;

pub use config::AiConfig;
pub use envelope::{
    AnalysisData, AnalyzeRequest, BlockedDecision, ClearOutcome, ClearStatus, FeedbackRequest,
    LearnResult, MemorySnapshot, ModelInfo, Outcome, Prediction, PredictionEnvelope,
    PrimaryResult, ProcessResponse, SafetyReport,
};
pub use error::AiError;
pub use system::NileLinkAi;
