//! Decision orchestration across the agent panel

use crate::negotiation::{NegotiationRoom, ResponseMap};
use nilelink_core::{
    default_agents, Agent, AgentSignal, ContextData, Decision, DecisionResult, InventorySignal,
    RiskLevel, TransactionData,
};
use std::collections::HashSet;

/// Coordinates the agent panel into one unified decision
///
/// Pure given agent purity: repeated calls on the same input yield
/// identical results, and no agent state survives a call.
#[derive(Debug)]
pub struct DecisionOrchestrator {
    agents: Vec<Box<dyn Agent>>,
    negotiation: NegotiationRoom,
}

impl Default for DecisionOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionOrchestrator {
    /// Orchestrator over the standard eleven-agent panel
    pub fn new() -> Self {
        Self::with_agents(default_agents())
    }

    /// Orchestrator over a custom agent set (test isolation, reduced panels)
    pub fn with_agents(agents: Vec<Box<dyn Agent>>) -> Self {
        Self {
            agents,
            negotiation: NegotiationRoom::new(),
        }
    }

    /// Run every agent, resolve conflicts, and synthesize the decision
    pub fn coordinate_decision(
        &self,
        context: &ContextData,
        data: &TransactionData,
    ) -> DecisionResult {
        let mut responses = ResponseMap::new();
        for agent in &self.agents {
            responses.insert(agent.role(), agent.analyze(context, data));
        }

        let negotiation_log = self.negotiation.debate(&responses);

        let mut concerns = Vec::new();
        let mut recommendations = Vec::new();
        for response in responses.values() {
            concerns.extend(response.concerns.iter().cloned());
            if let Some(recommendation) = &response.recommendation {
                recommendations.push(recommendation.clone());
            }
        }

        let risk_score = Self::risk_score(&responses);
        let risk_level = RiskLevel::from_score(risk_score);
        let decision = Decision::from_risk(risk_level);
        let inventory_signal = if responses
            .values()
            .any(|r| r.signal == AgentSignal::Restock)
        {
            InventorySignal::RestockRequired
        } else {
            InventorySignal::Stable
        };

        tracing::debug!(risk_score, %risk_level, ?decision, "agent panel aggregated");

        DecisionResult {
            decision,
            risk_level,
            concerns: dedup_preserving_order(concerns),
            recommendations,
            negotiation_log,
            agent_insights: responses,
            inventory_signal,
            context: context.clone(),
            future_simulations: None,
        }
    }

    /// Two points per concern plus one per recommendation, summed over the
    /// panel
    fn risk_score(responses: &ResponseMap) -> u32 {
        responses
            .values()
            .map(|r| 2 * r.concerns.len() as u32 + u32::from(r.recommendation.is_some()))
            .sum()
    }
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nilelink_core::{AgentResponse, AgentRole, UserContext};

    /// Stub agent that always reports a fixed concern
    #[derive(Debug)]
    struct FixedConcernAgent {
        role: AgentRole,
        concern: &'static str,
        signal: AgentSignal,
    }

    impl Agent for FixedConcernAgent {
        fn role(&self) -> AgentRole {
            self.role
        }

        fn analyze(&self, _context: &ContextData, _data: &TransactionData) -> AgentResponse {
            let mut response = AgentResponse::new(self.role, 0.9);
            response.concerns.push(self.concern.to_string());
            response.signal = self.signal;
            response
        }
    }

    fn context() -> ContextData {
        UserContext::default().resolve()
    }

    #[test]
    fn test_duplicate_concerns_collapse() {
        let orchestrator = DecisionOrchestrator::with_agents(vec![
            Box::new(FixedConcernAgent {
                role: AgentRole::Risk,
                concern: "Shared concern",
                signal: AgentSignal::None,
            }),
            Box::new(FixedConcernAgent {
                role: AgentRole::Finance,
                concern: "Shared concern",
                signal: AgentSignal::None,
            }),
        ]);

        let result = orchestrator.coordinate_decision(&context(), &TransactionData::default());

        assert_eq!(result.concerns, vec!["Shared concern"]);
        // Dedup affects the output list, not the risk score
        assert_eq!(result.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_restock_signal_routes_inventory() {
        let orchestrator = DecisionOrchestrator::with_agents(vec![Box::new(FixedConcernAgent {
            role: AgentRole::Inventory,
            concern: "Stock low",
            signal: AgentSignal::Restock,
        })]);

        let result = orchestrator.coordinate_decision(&context(), &TransactionData::default());

        assert_eq!(result.inventory_signal, InventorySignal::RestockRequired);
    }

    #[test]
    fn test_quiet_panel_approves() {
        let data = TransactionData {
            amount: 100.0,
            user_age_days: 365,
            factors: nilelink_core::BehaviorFactors {
                order_frequency: 0.5,
                spending_pattern: 0.5,
                loyalty_streak: 0.5,
            },
            ..Default::default()
        };

        let result = DecisionOrchestrator::new().coordinate_decision(&context(), &data);

        // Only the behavior agent recommends (standard accrual): score 1
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.decision, Decision::Approve);
    }

    #[test]
    fn test_risky_transaction_reviews() {
        let data = TransactionData {
            amount: 6000.0,
            user_age_days: 5,
            ip_country: "US".to_string(),
            billing_country: "EG".to_string(),
            ..Default::default()
        };

        let result = DecisionOrchestrator::new().coordinate_decision(&context(), &data);

        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.decision, Decision::Review);
        assert!(result
            .concerns
            .iter()
            .any(|c| c.contains("High transaction amount")));
        assert!(result
            .concerns
            .iter()
            .any(|c| c.contains("Geographic mismatch")));
        // Geo mismatch leaves the risk agent requesting identity verification
        assert!(result.negotiation_log[0].contains("identity"));
    }

    #[test]
    fn test_insights_keyed_by_role() {
        let result =
            DecisionOrchestrator::new().coordinate_decision(&context(), &TransactionData::default());

        assert_eq!(result.agent_insights.len(), 11);
        assert!(result.agent_insights.contains_key(&AgentRole::Behavior));
    }
}
