//! # NileLink Runtime
//!
//! The decision pipeline over the agent panel:
//! - [`DecisionOrchestrator`] — runs every agent and synthesizes one decision
//! - [`NegotiationRoom`] — rule-table conflict resolution between agents
//! - [`FutureSimulationEngine`] — best / most-likely / worst projections
//! - [`PolicyEthicsGuard`] — the pre-orchestration veto gate
//!
//! ## Quick Start
//!
//! ```rust
//! use nilelink_core::{Decision, TransactionData, UserContext};
//! use nilelink_runtime::DecisionOrchestrator;
//!
//! let orchestrator = DecisionOrchestrator::new();
//! let context = UserContext::default().resolve();
//! let data = TransactionData {
//!     amount: 6000.0,
//!     ip_country: "US".to_string(),
//!     billing_country: "EG".to_string(),
//!     ..Default::default()
//! };
//!
//! let result = orchestrator.coordinate_decision(&context, &data);
//! assert_eq!(result.decision, Decision::Review);
//! ```

pub mod guard;
pub mod negotiation;
pub mod orchestrator;
pub mod simulation;

pub use guard::{GuardVerdict, GuardedAction, PolicyEthicsGuard};
pub use negotiation::{NegotiationRoom, ResponseMap};
pub use orchestrator::DecisionOrchestrator;
pub use simulation::FutureSimulationEngine;
