//! Conflict resolution between agent recommendations
//!
//! Conflicts are detected through an ordered rule table over the typed
//! [`AgentSignal`]s, so detection survives recommendation wording changes.
//! The first matching rule wins; no match yields a single consensus line.

use nilelink_core::{AgentResponse, AgentRole, AgentSignal};
use std::collections::BTreeMap;

/// Role-keyed panel output, as assembled by the orchestrator
pub type ResponseMap = BTreeMap<AgentRole, AgentResponse>;

/// Predicate deciding whether a conflict rule applies
type ConflictPredicate = fn(&ResponseMap) -> bool;

/// One entry in the conflict table
struct ConflictRule {
    /// Agent raising the stricter position
    initiator: AgentRole,
    /// Agent pushing back
    responder: AgentRole,
    /// When this conflict is considered active
    predicate: ConflictPredicate,
    /// Scripted three-line resolution
    resolution: [&'static str; 3],
}

fn signal_of(responses: &ResponseMap, role: AgentRole) -> AgentSignal {
    responses.get(&role).map(|r| r.signal).unwrap_or_default()
}

fn risk_escalates_finance_monitors(responses: &ResponseMap) -> bool {
    signal_of(responses, AgentRole::Risk) == AgentSignal::Escalate
        && signal_of(responses, AgentRole::Finance) == AgentSignal::Monitor
}

fn risk_requires_identity(responses: &ResponseMap) -> bool {
    signal_of(responses, AgentRole::Risk) == AgentSignal::VerifyIdentity
}

static RULES: [ConflictRule; 2] = [
    ConflictRule {
        initiator: AgentRole::Risk,
        responder: AgentRole::Finance,
        predicate: risk_escalates_finance_monitors,
        resolution: [
            "RISK: Recommendation for Manual Review due to potential fraud indicators.",
            "FINANCE: Counter-proposal: Monitoring is sufficient to avoid UX friction for this customer segment.",
            "SYSTEM: Resolving conflict via risk-weighted priority. Final stance: MONITOR with elevated alert threshold.",
        ],
    },
    ConflictRule {
        initiator: AgentRole::Risk,
        responder: AgentRole::Ux,
        predicate: risk_requires_identity,
        resolution: [
            "RISK: User identity must be verified immediately.",
            "UX: Immediate verification will drop conversion by 40%. Requesting background check first.",
            "SYSTEM: Compromise reached: Transparent background check initiated; MFA only if secondary signals trigger.",
        ],
    },
];

/// Resolves conflicting agent positions into a debate narrative
#[derive(Debug, Default)]
pub struct NegotiationRoom;

impl NegotiationRoom {
    /// Room over the standard conflict table
    pub fn new() -> Self {
        Self
    }

    /// Produce the negotiation log for one orchestration pass
    pub fn debate(&self, responses: &ResponseMap) -> Vec<String> {
        for rule in &RULES {
            if (rule.predicate)(responses) {
                tracing::debug!(
                    initiator = %rule.initiator,
                    responder = %rule.responder,
                    "negotiation conflict matched"
                );
                return rule.resolution.iter().map(|line| line.to_string()).collect();
            }
        }

        vec!["All agents in consensus. Standard protocol applied.".to_string()]
    }
}
