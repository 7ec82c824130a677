//! Agent contract and response types
//!
//! An agent is a pure evaluator over a `(ContextData, TransactionData)`
//! pair covering one business domain. Agents hold no state, never fail,
//! and route downstream behavior through [`AgentSignal`] rather than
//! recommendation text.

use crate::context::ContextData;
use crate::transaction::TransactionData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Business domain an agent covers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    /// Store strategy and planning
    Strategy,
    /// Fraud and transaction risk
    Risk,
    /// Financial exposure
    Finance,
    /// Operational throughput
    Operations,
    /// Payload and account security
    Security,
    /// User experience
    Ux,
    /// Stock levels and supply chain
    Inventory,
    /// Failure handling under chaos
    Resilience,
    /// Demand and pricing
    Market,
    /// Regulatory and FX compliance
    Compliance,
    /// Behavioral segmentation
    Behavior,
}

impl AgentRole {
    /// Every role, in orchestration order
    pub const ALL: [AgentRole; 11] = [
        AgentRole::Strategy,
        AgentRole::Risk,
        AgentRole::Finance,
        AgentRole::Operations,
        AgentRole::Security,
        AgentRole::Ux,
        AgentRole::Inventory,
        AgentRole::Resilience,
        AgentRole::Market,
        AgentRole::Compliance,
        AgentRole::Behavior,
    ];

    /// Lowercase wire name of this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strategy => "strategy",
            Self::Risk => "risk",
            Self::Finance => "finance",
            Self::Operations => "operations",
            Self::Security => "security",
            Self::Ux => "ux",
            Self::Inventory => "inventory",
            Self::Resilience => "resilience",
            Self::Market => "market",
            Self::Compliance => "compliance",
            Self::Behavior => "behavior",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed routing signal attached to a response
///
/// The negotiation table and the inventory signal match on this instead of
/// parsing recommendation text, so conflict detection survives wording
/// changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentSignal {
    /// No actionable output
    #[default]
    None,
    /// Text guidance with no routing semantics
    Advisory,
    /// Escalate to manual review
    Escalate,
    /// Keep the transaction under monitoring
    Monitor,
    /// Verify the user's identity
    VerifyIdentity,
    /// Trigger a restock workflow
    Restock,
}

/// One agent's verdict for a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Which agent produced this
    pub agent: AgentRole,
    /// Confidence of this agent's domain logic (0.0 - 1.0)
    pub confidence: f64,
    /// Neutral observations
    pub insights: Vec<String>,
    /// Findings that raise the aggregate risk score
    pub concerns: Vec<String>,
    /// Suggested follow-up action, if any
    pub recommendation: Option<String>,
    /// Typed routing signal
    #[serde(default)]
    pub signal: AgentSignal,
}

impl AgentResponse {
    /// Empty response for the given role at its confidence level
    pub fn new(agent: AgentRole, confidence: f64) -> Self {
        Self {
            agent,
            confidence,
            insights: Vec::new(),
            concerns: Vec::new(),
            recommendation: None,
            signal: AgentSignal::None,
        }
    }
}

/// A pure rule evaluator for one business domain
pub trait Agent: Send + Sync + fmt::Debug {
    /// The domain this agent covers
    fn role(&self) -> AgentRole;

    /// Evaluate a request. Must be deterministic and side-effect free;
    /// missing payload fields are treated as zero, never as an error.
    fn analyze(&self, context: &ContextData, data: &TransactionData) -> AgentResponse;
}
