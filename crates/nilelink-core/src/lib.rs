//! # NileLink Core
//!
//! Core types for the NileLink decision engine:
//! - [`UserContext`] / [`ContextData`] — loose and resolved request context
//! - [`TransactionData`] — the typed transaction payload
//! - [`Agent`] — the pure evaluator contract, with eleven domain implementations
//! - [`FraudModel`] — the weighted rule scorer behind the feedback loop
//!
//! ## Quick Start
//!
//! ```rust
//! use nilelink_core::{Agent, AgentRole, TransactionData, UserContext, default_agents};
//!
//! let context = UserContext::default().resolve();
//! let data = TransactionData { amount: 6000.0, ..Default::default() };
//!
//! let panel = default_agents();
//! let risk = panel.iter().find(|a| a.role() == AgentRole::Risk).unwrap();
//! let response = risk.analyze(&context, &data);
//!
//! assert!(!response.concerns.is_empty());
//! ```

pub mod agent;
pub mod agents;
pub mod context;
pub mod decision;
pub mod fraud;
pub mod transaction;

pub use agent::{Agent, AgentResponse, AgentRole, AgentSignal};
pub use agents::default_agents;
pub use context::{ContextData, UserContext};
pub use decision::{
    Decision, DecisionResult, FutureSimulation, InventorySignal, RiskLevel, Scenario,
};
pub use fraud::{FraudModel, FraudPrediction, FraudWeights};
pub use transaction::{BehaviorFactors, ChaosKind, TransactionData, UNKNOWN_COUNTRY};
