//! Rule-based fraud scorer with reinforcement-adjustable weights
//!
//! The scorer runs independently of the agent panel; the feedback loop
//! nudges its weights after real-world outcomes come back.

use crate::decision::Decision;
use crate::transaction::TransactionData;
use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// Last UTC hour (inclusive) of the late-night scoring window
const LATE_NIGHT_END_HOUR: u32 = 4;

/// Per-dimension sensitivity weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FraudWeights {
    /// Transaction amount rules
    pub amount: f64,
    /// Transaction frequency rules
    pub velocity: f64,
    /// IP / billing country mismatch
    pub geo: f64,
    /// Late-night transaction window
    pub time: f64,
}

impl Default for FraudWeights {
    fn default() -> Self {
        Self {
            amount: 0.4,
            velocity: 0.3,
            geo: 0.2,
            time: 0.1,
        }
    }
}

impl FraudWeights {
    fn scaled(self, factor: f64) -> Self {
        Self {
            amount: round4(self.amount * factor),
            velocity: round4(self.velocity * factor),
            geo: round4(self.geo * factor),
            time: round4(self.time * factor),
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Output of one scoring pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudPrediction {
    /// Risk score on a 0-100 scale
    pub score: f64,
    /// Threshold-banded routing decision
    pub decision: Decision,
    /// Which rules fired
    pub reasons: Vec<String>,
}

impl FraudPrediction {
    /// Map the 0-100 score into a 0-1 confidence (higher means safer)
    pub fn as_confidence(&self) -> f64 {
        1.0 - self.score / 100.0
    }
}

/// Weighted rule scorer maintained independently of the agent panel
///
/// Weights are process-lifetime state; they are not persisted across
/// restarts.
#[derive(Debug, Clone, Default)]
pub struct FraudModel {
    weights: FraudWeights,
}

impl FraudModel {
    /// Model at default sensitivity
    pub fn new() -> Self {
        Self::default()
    }

    /// Model with explicit starting weights
    pub fn with_weights(weights: FraudWeights) -> Self {
        Self { weights }
    }

    /// Snapshot of the current weights
    pub fn weights(&self) -> FraudWeights {
        self.weights
    }

    /// Reinforcement step: scale every weight by +5% (increase) or -5%
    /// (decrease), rounded to 4 decimals.
    pub fn adjust_weights(&mut self, increase_sensitivity: bool) {
        let factor = if increase_sensitivity { 1.05 } else { 0.95 };
        self.weights = self.weights.scaled(factor);
        tracing::debug!(
            increase_sensitivity,
            weights = ?self.weights,
            "fraud weights adjusted"
        );
    }

    /// Score a transaction. Each rule's contribution scales off its weight;
    /// at default weights the rules contribute 40 / 20 / 20 / 20 / 10 / 15
    /// points respectively.
    pub fn predict(&self, data: &TransactionData) -> FraudPrediction {
        let mut score = 0.0;
        let mut reasons = Vec::new();

        if data.amount > 5000.0 {
            score += self.weights.amount * 100.0;
            reasons.push("High transaction amount".to_string());
        } else if data.amount > 1000.0 {
            score += self.weights.amount * 50.0;
        }

        // Combination rule: fixed contribution, not weight-scaled
        if data.user_age_days < 30 && data.amount > 500.0 {
            score += 20.0;
            reasons.push("New user with significant transaction".to_string());
        }

        if data.geo_mismatch() {
            score += self.weights.geo * 100.0;
            reasons.push(format!(
                "IP location ({}) does not match billing ({})",
                data.ip_country, data.billing_country
            ));
        }

        if let Some(timestamp) = data.timestamp {
            if timestamp.hour() <= LATE_NIGHT_END_HOUR {
                score += self.weights.time * 100.0;
                reasons.push("Late-night transaction window".to_string());
            }
        }

        if data.txn_history_count > 10 {
            score += self.weights.velocity * 50.0;
            reasons.push("High transaction velocity".to_string());
        }

        let score = score.min(100.0);
        let decision = if score >= 80.0 {
            Decision::Reject
        } else if score >= 50.0 {
            Decision::Review
        } else {
            Decision::Approve
        };

        FraudPrediction {
            score,
            decision,
            reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn risky() -> TransactionData {
        TransactionData {
            amount: 6000.0,
            user_age_days: 5,
            ip_country: "US".to_string(),
            billing_country: "EG".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_weights() {
        let weights = FraudWeights::default();
        assert_eq!(weights.amount, 0.4);
        assert_eq!(weights.velocity, 0.3);
        assert_eq!(weights.geo, 0.2);
        assert_eq!(weights.time, 0.1);
    }

    #[test]
    fn test_high_risk_combination_rejects() {
        let prediction = FraudModel::new().predict(&risky());

        // 40 (amount) + 20 (new user) + 20 (geo)
        assert_eq!(prediction.score, 80.0);
        assert_eq!(prediction.decision, Decision::Reject);
        assert_eq!(prediction.reasons.len(), 3);
    }

    #[test]
    fn test_mid_amount_scores_without_reason() {
        let data = TransactionData {
            amount: 2000.0,
            user_age_days: 365,
            ..Default::default()
        };
        let prediction = FraudModel::new().predict(&data);

        assert_eq!(prediction.score, 20.0);
        assert!(prediction.reasons.is_empty());
        assert_eq!(prediction.decision, Decision::Approve);
    }

    #[test]
    fn test_velocity_rule() {
        let data = TransactionData {
            txn_history_count: 12,
            user_age_days: 365,
            ..Default::default()
        };
        let prediction = FraudModel::new().predict(&data);

        assert_eq!(prediction.score, 15.0);
        assert_eq!(prediction.reasons, vec!["High transaction velocity"]);
    }

    #[test]
    fn test_late_night_rule() {
        let data = TransactionData {
            user_age_days: 365,
            timestamp: Some(Utc.with_ymd_and_hms(2026, 3, 1, 3, 15, 0).unwrap()),
            ..Default::default()
        };
        let prediction = FraudModel::new().predict(&data);
        assert_eq!(prediction.score, 10.0);

        let daytime = TransactionData {
            user_age_days: 365,
            timestamp: Some(Utc.with_ymd_and_hms(2026, 3, 1, 14, 0, 0).unwrap()),
            ..Default::default()
        };
        let prediction = FraudModel::new().predict(&daytime);
        assert_eq!(prediction.score, 0.0);
    }

    #[test]
    fn test_score_capped() {
        let mut data = risky();
        data.txn_history_count = 50;
        data.timestamp = Some(Utc.with_ymd_and_hms(2026, 3, 1, 2, 0, 0).unwrap());
        let prediction = FraudModel::new().predict(&data);

        assert_eq!(prediction.score, 100.0);
        assert_eq!(prediction.decision, Decision::Reject);
    }

    #[test]
    fn test_adjust_weights_up() {
        let mut model = FraudModel::new();
        model.adjust_weights(true);
        let weights = model.weights();

        assert_eq!(weights.amount, 0.42);
        assert_eq!(weights.velocity, 0.315);
        assert_eq!(weights.geo, 0.21);
        assert_eq!(weights.time, 0.105);
    }

    #[test]
    fn test_adjust_weights_down() {
        let mut model = FraudModel::new();
        model.adjust_weights(false);
        let weights = model.weights();

        assert_eq!(weights.amount, 0.38);
        assert_eq!(weights.velocity, 0.285);
        assert_eq!(weights.geo, 0.19);
        assert_eq!(weights.time, 0.095);
    }

    #[test]
    fn test_adjusted_weights_shift_scoring() {
        let mut model = FraudModel::new();
        model.adjust_weights(true);
        let prediction = model.predict(&risky());

        // 42 + 20 + 21 at increased sensitivity
        assert_eq!(prediction.score, 83.0);
    }

    #[test]
    fn test_confidence_mapping() {
        let prediction = FraudModel::new().predict(&risky());
        assert!((prediction.as_confidence() - 0.2).abs() < 1e-9);
    }
}
