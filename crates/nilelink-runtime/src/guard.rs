//! Pre-orchestration policy and ethics gate
//!
//! The guard is the only component allowed to short-circuit the pipeline:
//! a failed check turns into a BLOCKED decision before any agent runs.

use nilelink_core::{ContextData, TransactionData};
use serde::{Deserialize, Serialize};

/// Action under evaluation by the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardedAction {
    /// Standard transaction processing
    ProcessTransaction,
    /// Sales flow flagged as aggressive
    AggressiveSelling,
    /// Sales flow applying time or social pressure
    PressureTactics,
}

impl GuardedAction {
    fn is_pressure(self) -> bool {
        matches!(self, Self::AggressiveSelling | Self::PressureTactics)
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardVerdict {
    /// Whether the action may proceed
    pub approved: bool,
    /// Every rule the action violated
    pub violations: Vec<String>,
    /// Human-readable summary of the verdict
    pub reasoning: String,
}

/// Fixed rule gate evaluated before orchestration
#[derive(Debug, Default)]
pub struct PolicyEthicsGuard;

impl PolicyEthicsGuard {
    /// The charter every check is anchored to
    pub const CHARTER: [&'static str; 5] = [
        "user_data_belongs_to_user",
        "learning_must_be_explainable",
        "no_dark_patterns",
        "no_emotional_manipulation",
        "no_silent_irreversible_actions",
    ];

    /// Guard with the standard rule set
    pub fn new() -> Self {
        Self
    }

    /// Evaluate an action against the rule set
    pub fn check_action(
        &self,
        action: GuardedAction,
        context: &ContextData,
        data: &TransactionData,
    ) -> GuardVerdict {
        let mut violations = Vec::new();

        if data.high_risk && !matches!(context.user_role.as_str(), "admin" | "owner") {
            violations.push("High-risk action requires elevated permissions".to_string());
        }

        if context.has_signal("stress") && action.is_pressure() {
            violations.push("Cannot use pressure tactics on stressed users".to_string());
        }

        let approved = violations.is_empty();
        let reasoning = if approved {
            "Action complies with all ethical guidelines"
        } else {
            "Violates ethical guidelines"
        }
        .to_string();

        GuardVerdict {
            approved,
            violations,
            reasoning,
        }
    }
}
