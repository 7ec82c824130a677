//! The eleven concrete domain agents
//!
//! Thresholds and wording mirror the production rule set. Each agent reads
//! only the fields relevant to its domain; everything else is ignored.

use crate::agent::{Agent, AgentResponse, AgentRole, AgentSignal};
use crate::context::ContextData;
use crate::transaction::{ChaosKind, TransactionData};

/// The standard panel, in orchestration order
pub fn default_agents() -> Vec<Box<dyn Agent>> {
    vec![
        Box::new(StrategyAgent),
        Box::new(RiskAgent),
        Box::new(FinanceAgent),
        Box::new(OperationsAgent),
        Box::new(SecurityAgent),
        Box::new(UxAgent),
        Box::new(InventoryAgent),
        Box::new(ResilienceAgent),
        Box::new(MarketAgent),
        Box::new(ComplianceAgent),
        Box::new(BehaviorAgent),
    ]
}

/// Store strategy: peak-hour planning and emergency restocking
#[derive(Debug, Default)]
pub struct StrategyAgent;

impl Agent for StrategyAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Strategy
    }

    fn analyze(&self, context: &ContextData, data: &TransactionData) -> AgentResponse {
        let mut response = AgentResponse::new(AgentRole::Strategy, 0.85);

        if context.system_state == "POS" {
            response
                .insights
                .push("POS operations can be optimized for peak hours".to_string());
            if data.inventory_low {
                response
                    .concerns
                    .push("Low inventory may impact customer satisfaction".to_string());
                response.recommendation =
                    Some("Consider emergency restocking or supplier negotiation".to_string());
                response.signal = AgentSignal::Restock;
            }
        }

        response
    }
}

/// Transaction risk: high amounts and geographic mismatches
#[derive(Debug, Default)]
pub struct RiskAgent;

impl Agent for RiskAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Risk
    }

    fn analyze(&self, _context: &ContextData, data: &TransactionData) -> AgentResponse {
        let mut response = AgentResponse::new(AgentRole::Risk, 0.92);

        if data.amount > 5000.0 {
            response
                .concerns
                .push(format!("High transaction amount: ${}", data.amount));
            response.recommendation = Some("Escalate for manual review".to_string());
            response.signal = AgentSignal::Escalate;
        }

        if data.geo_mismatch() {
            response
                .concerns
                .push("Geographic mismatch detected".to_string());
            response.recommendation = Some("Verify user identity".to_string());
            response.signal = AgentSignal::VerifyIdentity;
        }

        response
    }
}

/// Financial exposure: new users moving significant value
#[derive(Debug, Default)]
pub struct FinanceAgent;

impl Agent for FinanceAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Finance
    }

    fn analyze(&self, _context: &ContextData, data: &TransactionData) -> AgentResponse {
        let mut response = AgentResponse::new(AgentRole::Finance, 0.78);

        if data.amount > 0.0 {
            response
                .insights
                .push(format!("Transaction value: ${}", data.amount));

            if data.amount > 1000.0 && data.user_age_days < 30 {
                response
                    .concerns
                    .push("New user with significant transaction".to_string());
                response.recommendation =
                    Some("Monitor for unusual spending patterns".to_string());
                response.signal = AgentSignal::Monitor;
            }
        }

        response
    }
}

/// Operational throughput: transaction velocity
#[derive(Debug, Default)]
pub struct OperationsAgent;

impl Agent for OperationsAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Operations
    }

    fn analyze(&self, _context: &ContextData, data: &TransactionData) -> AgentResponse {
        let mut response = AgentResponse::new(AgentRole::Operations, 0.80);

        if data.txn_history_count > 10 {
            response
                .concerns
                .push("High transaction velocity".to_string());
            response.recommendation =
                Some("Check for automated or fraudulent activity".to_string());
            response.signal = AgentSignal::Monitor;
        }

        response
    }
}

/// Payload and account security
#[derive(Debug, Default)]
pub struct SecurityAgent;

impl Agent for SecurityAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Security
    }

    fn analyze(&self, _context: &ContextData, data: &TransactionData) -> AgentResponse {
        let mut response = AgentResponse::new(AgentRole::Security, 0.95);

        let mut issues = Vec::new();
        if !data.user_id.is_empty() && data.user_id.len() < 5 {
            issues.push("Suspicious user ID format".to_string());
        }
        if data.payload_size() > 1000 {
            issues.push("Unusually large payload".to_string());
        }

        if !issues.is_empty() {
            response.concerns.extend(issues);
            response.recommendation =
                Some("Implement additional security measures".to_string());
            response.signal = AgentSignal::Advisory;
        }

        response
    }
}

/// User experience: stress and urgency handling
#[derive(Debug, Default)]
pub struct UxAgent;

impl Agent for UxAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Ux
    }

    fn analyze(&self, context: &ContextData, _data: &TransactionData) -> AgentResponse {
        let mut response = AgentResponse::new(AgentRole::Ux, 0.70);

        if context.has_signal("stress") {
            response.concerns.push("User appears stressed".to_string());
            response.recommendation =
                Some("Simplify interface and provide clear guidance".to_string());
            response.signal = AgentSignal::Advisory;
        }

        if context.urgency_level > 7 {
            response.insights.push("High urgency detected".to_string());
            response.recommendation =
                Some("Prioritize quick actions and clear instructions".to_string());
            response.signal = AgentSignal::Advisory;
        }

        response
    }
}

/// Stock levels: velocity periods and restock triggers
#[derive(Debug, Default)]
pub struct InventoryAgent;

impl Agent for InventoryAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Inventory
    }

    fn analyze(&self, _context: &ContextData, data: &TransactionData) -> AgentResponse {
        let mut response = AgentResponse::new(AgentRole::Inventory, 0.88);

        if data.items.len() > 5 || data.amount > 1000.0 {
            response
                .insights
                .push("Inventory high-velocity period detected".to_string());
            if data.items.len() > 10 {
                response
                    .concerns
                    .push("Stock item 'SKU-88' approaching 15% threshold".to_string());
                response.recommendation =
                    Some("Initialize autonomous restock workflow #SC-901".to_string());
                response.signal = AgentSignal::Restock;
            }
        }

        response
    }
}

/// Failure handling: chaos drills and crisis environments
///
/// Under chaos the agent reports at higher confidence and suppresses
/// concerns, so degraded conditions do not cascade into blocking.
#[derive(Debug, Default)]
pub struct ResilienceAgent;

impl Agent for ResilienceAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Resilience
    }

    fn analyze(&self, context: &ContextData, data: &TransactionData) -> AgentResponse {
        let mut response = AgentResponse::new(AgentRole::Resilience, 0.80);

        if data.is_chaos || context.environment == "crisis" {
            response.confidence = 0.98;
            let chaos_label = data
                .chaos_type
                .map(|kind| kind.to_string())
                .unwrap_or_else(|| "NONE".to_string());
            response
                .insights
                .push(format!("Resilience mesh active: handling {chaos_label}"));
            response.recommendation = match data.chaos_type {
                Some(ChaosKind::NodeFailure) => {
                    Some("Engage shadow node failover immediately.".to_string())
                }
                Some(ChaosKind::NetworkLatency) => {
                    Some("Relax timeout thresholds for L3 confirmation.".to_string())
                }
                None => None,
            };
            if response.recommendation.is_some() {
                response.signal = AgentSignal::Advisory;
            }
        } else {
            response
                .insights
                .push("Normal node operations".to_string());
        }

        response
    }
}

/// Demand and pricing: load shaping and volume trends
#[derive(Debug, Default)]
pub struct MarketAgent;

impl Agent for MarketAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Market
    }

    fn analyze(&self, _context: &ContextData, data: &TransactionData) -> AgentResponse {
        let mut response = AgentResponse::new(AgentRole::Market, 0.92);

        if data.load_factor > 1.5 {
            response
                .insights
                .push("Ecosystem saturation detected (Load > 1.5)".to_string());
            response.recommendation =
                Some("Increase fee multiplier by 0.15x to shape demand.".to_string());
            response.signal = AgentSignal::Advisory;
            response
                .concerns
                .push("Potential surge impact on UX conversion.".to_string());
        } else if data.load_factor < 0.9 {
            response
                .insights
                .push("Excess capacity in current cluster".to_string());
            response.recommendation =
                Some("Enable 10% 'System Slack' discount for new orders.".to_string());
            response.signal = AgentSignal::Advisory;
        } else {
            response
                .insights
                .push("Market equilibrium maintained".to_string());
        }

        if data.recent_volume > 500 {
            response
                .insights
                .push("Institutional volume trend: BULLISH".to_string());
        }

        response
    }
}

/// Regulatory and FX compliance
#[derive(Debug, Default)]
pub struct ComplianceAgent;

impl Agent for ComplianceAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Compliance
    }

    fn analyze(&self, _context: &ContextData, data: &TransactionData) -> AgentResponse {
        let mut response = AgentResponse::new(AgentRole::Compliance, 0.95);

        if data.fx_delta > 0.10 {
            response.concerns.push(format!(
                "EXTREME VOLATILITY: {} delta is {:.1}%",
                data.currency,
                data.fx_delta * 100.0
            ));
            response.recommendation =
                Some("PAUSE SETTLEMENT BRIDGE: High risk of institutional slippage.".to_string());
            response.signal = AgentSignal::Advisory;
        } else if data.fx_delta > 0.05 {
            response
                .insights
                .push(format!("Moderate {} volatility detected.", data.currency));
            response.recommendation = Some("Increase volatility buffer to 8%.".to_string());
            response.signal = AgentSignal::Advisory;
        }

        if matches!(data.region.as_str(), "AE" | "SA" | "EG") {
            response.insights.push(format!(
                "Applying {} institutional compliance logic.",
                data.region
            ));
            if data.amount > 500_000.0 {
                response.insights.push(
                    "High-value transaction: Auto-triggering regulatory reporting.".to_string(),
                );
            }
        }

        response
    }
}

/// Behavioral segmentation from engagement factors
#[derive(Debug, Default)]
pub struct BehaviorAgent;

impl Agent for BehaviorAgent {
    fn role(&self) -> AgentRole {
        AgentRole::Behavior
    }

    fn analyze(&self, _context: &ContextData, data: &TransactionData) -> AgentResponse {
        let mut response = AgentResponse::new(AgentRole::Behavior, 0.90);

        let factors = &data.factors;
        let score = factors.order_frequency * 0.4
            + factors.spending_pattern * 0.3
            + factors.loyalty_streak * 0.3;

        if score > 0.8 {
            response
                .insights
                .push("Segment: POWER_USER - High retention probability.".to_string());
            response.recommendation =
                Some("Offer exclusive 'Tier 1' governance rewards.".to_string());
        } else if score < 0.3 {
            response
                .concerns
                .push("Segment: CHURN_RISK - Low engagement detected.".to_string());
            response.recommendation =
                Some("Trigger 'Re-activation' loyalty multiplier (2x).".to_string());
        } else {
            response
                .insights
                .push("Segment: STANDARD_ENGAGED.".to_string());
            response.recommendation = Some("Continue standard reward accrual.".to_string());
        }
        response.signal = AgentSignal::Advisory;

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::UserContext;
    use crate::transaction::{BehaviorFactors, ChaosKind};

    fn context() -> ContextData {
        UserContext::default().resolve()
    }

    #[test]
    fn test_panel_covers_all_roles_in_order() {
        let roles: Vec<_> = default_agents().iter().map(|a| a.role()).collect();
        assert_eq!(roles, AgentRole::ALL);
    }

    #[test]
    fn test_risk_flags_high_amount() {
        let data = TransactionData {
            amount: 6000.0,
            ..Default::default()
        };
        let response = RiskAgent.analyze(&context(), &data);

        assert_eq!(response.concerns, vec!["High transaction amount: $6000"]);
        assert_eq!(response.signal, AgentSignal::Escalate);
    }

    #[test]
    fn test_risk_quiet_below_threshold() {
        let data = TransactionData {
            amount: 100.0,
            ..Default::default()
        };
        let response = RiskAgent.analyze(&context(), &data);

        assert!(response.concerns.is_empty());
        assert!(response.recommendation.is_none());
    }

    #[test]
    fn test_risk_geo_mismatch_overrides_signal() {
        let data = TransactionData {
            amount: 6000.0,
            ip_country: "US".to_string(),
            billing_country: "EG".to_string(),
            ..Default::default()
        };
        let response = RiskAgent.analyze(&context(), &data);

        assert_eq!(response.concerns.len(), 2);
        assert_eq!(response.signal, AgentSignal::VerifyIdentity);
        assert_eq!(
            response.recommendation.as_deref(),
            Some("Verify user identity")
        );
    }

    #[test]
    fn test_finance_flags_new_user_spend() {
        let data = TransactionData {
            amount: 1500.0,
            user_age_days: 10,
            ..Default::default()
        };
        let response = FinanceAgent.analyze(&context(), &data);

        assert_eq!(response.concerns, vec!["New user with significant transaction"]);
        assert_eq!(response.signal, AgentSignal::Monitor);
    }

    #[test]
    fn test_operations_velocity() {
        let data = TransactionData {
            txn_history_count: 11,
            ..Default::default()
        };
        let response = OperationsAgent.analyze(&context(), &data);

        assert_eq!(response.concerns, vec!["High transaction velocity"]);
    }

    #[test]
    fn test_security_short_user_id() {
        let data = TransactionData {
            user_id: "u1".to_string(),
            ..Default::default()
        };
        let response = SecurityAgent.analyze(&context(), &data);

        assert_eq!(response.concerns, vec!["Suspicious user ID format"]);
    }

    #[test]
    fn test_security_ignores_empty_user_id() {
        let response = SecurityAgent.analyze(&context(), &TransactionData::default());
        assert!(response.concerns.is_empty());
    }

    #[test]
    fn test_ux_stress_and_urgency() {
        let stressed = UserContext {
            emotional_signals: Some(vec!["stress".to_string()]),
            urgency_level: Some(9),
            ..Default::default()
        }
        .resolve();
        let response = UxAgent.analyze(&stressed, &TransactionData::default());

        assert_eq!(response.concerns, vec!["User appears stressed"]);
        assert_eq!(response.insights, vec!["High urgency detected"]);
    }

    #[test]
    fn test_inventory_restock_trigger() {
        let data = TransactionData {
            items: (0..11).map(|i| format!("item-{i}")).collect(),
            ..Default::default()
        };
        let response = InventoryAgent.analyze(&context(), &data);

        assert_eq!(response.signal, AgentSignal::Restock);
        assert_eq!(response.concerns.len(), 1);
    }

    #[test]
    fn test_resilience_chaos_raises_confidence() {
        let data = TransactionData {
            is_chaos: true,
            chaos_type: Some(ChaosKind::NodeFailure),
            ..Default::default()
        };
        let response = ResilienceAgent.analyze(&context(), &data);

        assert_eq!(response.confidence, 0.98);
        assert!(response.concerns.is_empty());
        assert_eq!(
            response.recommendation.as_deref(),
            Some("Engage shadow node failover immediately.")
        );
    }

    #[test]
    fn test_resilience_normal_operations() {
        let response = ResilienceAgent.analyze(&context(), &TransactionData::default());

        assert_eq!(response.confidence, 0.80);
        assert_eq!(response.insights, vec!["Normal node operations"]);
    }

    #[test]
    fn test_market_saturation() {
        let data = TransactionData {
            load_factor: 1.8,
            ..Default::default()
        };
        let response = MarketAgent.analyze(&context(), &data);

        assert_eq!(response.concerns.len(), 1);
        assert!(response.insights[0].contains("saturation"));
    }

    #[test]
    fn test_compliance_fx_bands() {
        let extreme = TransactionData {
            fx_delta: 0.12,
            ..Default::default()
        };
        let response = ComplianceAgent.analyze(&context(), &extreme);
        assert_eq!(response.concerns.len(), 1);

        let moderate = TransactionData {
            fx_delta: 0.07,
            ..Default::default()
        };
        let response = ComplianceAgent.analyze(&context(), &moderate);
        assert!(response.concerns.is_empty());
        assert_eq!(
            response.recommendation.as_deref(),
            Some("Increase volatility buffer to 8%.")
        );
    }

    #[test]
    fn test_behavior_buckets() {
        let power = TransactionData {
            factors: BehaviorFactors {
                order_frequency: 1.0,
                spending_pattern: 0.9,
                loyalty_streak: 0.9,
            },
            ..Default::default()
        };
        let response = BehaviorAgent.analyze(&context(), &power);
        assert!(response.insights[0].contains("POWER_USER"));

        let churn = BehaviorAgent.analyze(&context(), &TransactionData::default());
        assert!(churn.concerns[0].contains("CHURN_RISK"));

        let standard = TransactionData {
            factors: BehaviorFactors {
                order_frequency: 0.5,
                spending_pattern: 0.5,
                loyalty_streak: 0.5,
            },
            ..Default::default()
        };
        let response = BehaviorAgent.analyze(&context(), &standard);
        assert!(response.insights[0].contains("STANDARD_ENGAGED"));
        assert!(response.concerns.is_empty());
    }
}
