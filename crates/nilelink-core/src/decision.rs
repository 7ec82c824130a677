//! Decision outcome types produced by the orchestration pipeline

use crate::agent::{AgentResponse, AgentRole};
use crate::context::ContextData;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Final routing decision for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Let the transaction through
    Approve,
    /// Let it through under elevated monitoring
    Monitor,
    /// Hold for manual review
    Review,
    /// Refuse the transaction
    Reject,
    /// Vetoed by the policy guard before orchestration
    Blocked,
}

impl Decision {
    /// Map an aggregate risk band to its routing decision
    pub fn from_risk(risk: RiskLevel) -> Self {
        match risk {
            RiskLevel::High => Self::Review,
            RiskLevel::Medium => Self::Monitor,
            RiskLevel::Low => Self::Approve,
        }
    }
}

/// Aggregate risk band over the agent panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Nothing noteworthy
    Low,
    /// Some concerns raised
    Medium,
    /// Multiple or severe concerns
    High,
}

impl RiskLevel {
    /// Band the aggregate risk score: `>= 5` is high, `>= 2` medium
    pub fn from_score(score: u32) -> Self {
        if score >= 5 {
            Self::High
        } else if score >= 2 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Inventory routing signal derived from the panel's typed signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventorySignal {
    /// No restock action needed
    Stable,
    /// At least one agent requested a restock workflow
    RestockRequired,
}

/// Scenario identity for a future projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Everything settles cleanly
    Best,
    /// Standard settlement with routine friction
    MostLikely,
    /// Fraud or dispute materializes
    Worst,
}

/// One projected future for a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureSimulation {
    /// Which scenario this projection describes
    pub scenario: Scenario,
    /// Projected risk exposure (0.0 - 1.0)
    pub risk_exposure: f64,
    /// Expected cost of delaying the decision, in transaction currency
    pub cost_of_delay: f64,
    /// Consequences that cannot be undone if this future materializes
    pub irreversible_consequences: Vec<String>,
    /// Suggested posture for this scenario
    pub recommendation: String,
}

/// Unified output of one orchestration pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// Synthesized routing decision
    pub decision: Decision,
    /// Aggregate risk band
    pub risk_level: RiskLevel,
    /// Deduplicated concerns, first-occurrence order preserved
    pub concerns: Vec<String>,
    /// Every non-empty agent recommendation
    pub recommendations: Vec<String>,
    /// Narrative from the negotiation table
    pub negotiation_log: Vec<String>,
    /// Full per-agent responses, keyed by role
    pub agent_insights: BTreeMap<AgentRole, AgentResponse>,
    /// Restock routing derived from agent signals
    pub inventory_signal: InventorySignal,
    /// The resolved context this decision was made under
    pub context: ContextData,
    /// Scenario projections attached by the facade
    #[serde(skip_serializing_if = "Option::is_none")]
    pub future_simulations: Option<Vec<FutureSimulation>>,
}
