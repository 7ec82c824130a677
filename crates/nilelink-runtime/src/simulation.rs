//! Scripted future projection for a transaction
//!
//! Three fixed scenarios are derived arithmetically from a risk baseline,
//! ordered best / most_likely / worst with non-decreasing exposure.

use nilelink_core::{ContextData, FutureSimulation, Scenario, TransactionData};

/// Baseline exposure when no prior screening concerns are supplied
const DEFAULT_RISK_BASELINE: f64 = 0.5;

/// Produces best / most-likely / worst scenario projections
#[derive(Debug, Clone, Copy, Default)]
pub struct FutureSimulationEngine;

impl FutureSimulationEngine {
    /// Engine with the standard scenario scripts
    pub fn new() -> Self {
        Self
    }

    /// Project the three scenarios. Deterministic given inputs.
    pub fn simulate_futures(
        &self,
        _context: &ContextData,
        data: &TransactionData,
    ) -> Vec<FutureSimulation> {
        let amount = data.amount;
        let risk_baseline = match &data.prior_concerns {
            Some(concerns) => (0.1 + concerns.len() as f64 * 0.2).min(0.95),
            None => DEFAULT_RISK_BASELINE,
        };

        vec![
            FutureSimulation {
                scenario: Scenario::Best,
                risk_exposure: round2(risk_baseline * 0.3),
                cost_of_delay: 0.0,
                irreversible_consequences: Vec::new(),
                recommendation: "Approval reinforces customer loyalty and lifetime value."
                    .to_string(),
            },
            FutureSimulation {
                scenario: Scenario::MostLikely,
                risk_exposure: round2(risk_baseline),
                cost_of_delay: round2(0.05 * amount),
                irreversible_consequences: vec![
                    "5% probability of customer support inquiry".to_string()
                ],
                recommendation: "Proceed. 98% probability of successful settlement.".to_string(),
            },
            FutureSimulation {
                scenario: Scenario::Worst,
                risk_exposure: round2(risk_baseline * 1.5).min(1.0),
                cost_of_delay: amount,
                irreversible_consequences: vec![
                    "Potential financial loss".to_string(),
                    "Reputational impact".to_string(),
                    "Network trust degradation".to_string(),
                ],
                recommendation: format!(
                    "Implement 3D Secure or Manual Review to mitigate ${amount} exposure."
                ),
            },
        ]
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
