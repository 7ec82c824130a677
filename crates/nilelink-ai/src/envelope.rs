//! Analyze and feedback wire envelopes

use chrono::{DateTime, Utc};
use nilelink_core::{Decision, DecisionResult};
use nilelink_persist::MemoryEntry;
use serde::{Deserialize, Serialize};

/// Loose analyze request, validated at the service boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Transaction payload, typed as `TransactionData` after validation
    pub data: serde_json::Value,
    /// Caller context, typed as `UserContext` after validation
    #[serde(default)]
    pub context: serde_json::Value,
}

/// Real-world result reported back for a prior decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// The transaction settled cleanly
    Success,
    /// The transaction failed, charged back, or was disputed
    Failure,
}

/// Feedback contract driving the reinforcement loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    /// Id of the previously-returned decision
    pub request_id: String,
    /// Observed real-world outcome
    pub outcome: Outcome,
    /// Free-form details from the reporter; retained for audit, not yet
    /// consumed by the loop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// What the reinforcement loop did with a piece of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearnResult {
    /// A prior APPROVE turned out to be a failure; sensitivity raised
    SensitivityIncreased,
    /// A prior REVIEW turned out fine; sensitivity lowered
    SensitivityDecreased,
    /// Outcome matched the prediction; nothing to adjust
    NoAdjustment,
    /// No stored decision matches the request id
    NotFound,
}

/// Headline result in a prediction envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryResult {
    /// Transaction approved
    Approve,
    /// Approved under monitoring
    Monitor,
    /// Held for manual review
    Review,
    /// Refused
    Reject,
    /// Vetoed by the policy guard
    Blocked,
    /// Analysis failed internally; fallback envelope returned
    Error,
}

impl From<Decision> for PrimaryResult {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approve => Self::Approve,
            Decision::Monitor => Self::Monitor,
            Decision::Review => Self::Review,
            Decision::Reject => Self::Reject,
            Decision::Blocked => Self::Blocked,
        }
    }
}

/// Verdict payload when the guard vetoes processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedDecision {
    /// Always [`Decision::Blocked`]
    pub decision: Decision,
    /// The guard's reasoning line
    pub reason: String,
    /// Every rule the request violated
    pub violations: Vec<String>,
}

/// Decision payload carried by a process or analyze response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisData {
    /// Full orchestration output
    Decision(Box<DecisionResult>),
    /// Guard veto
    Blocked(BlockedDecision),
    /// Internal fault placeholder
    Error {
        /// Rendered error message
        error: String,
        /// Always [`PrimaryResult::Error`]
        decision: PrimaryResult,
    },
}

/// Outcome of one `process_request` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// False when the guard blocked the request
    pub success: bool,
    /// The decision or veto payload
    pub data: AnalysisData,
}

/// Headline prediction block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The routing decision, or ERROR on internal fault
    pub primary_result: PrimaryResult,
    /// Mean agent confidence, rounded to 4 decimals (0.0 when blocked)
    pub confidence_score: f64,
    /// One-line summary of the analysis
    pub explanation: String,
}

/// Model metadata block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model name
    pub name: String,
    /// Model version
    pub version: String,
    /// Deployment kind
    #[serde(rename = "type")]
    pub kind: String,
}

/// Safety block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    /// Warnings raised during analysis
    pub warnings: Vec<String>,
    /// Whether a fallback envelope replaced a failed analysis
    pub fallback_applied: bool,
}

/// Synchronous response envelope for `analyze_transaction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionEnvelope {
    /// False when blocked or failed
    pub success: bool,
    /// Id assigned to this analysis; absent on the fallback path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// When the envelope was produced
    pub timestamp: DateTime<Utc>,
    /// Deployment environment label
    pub environment: String,
    /// Wall-clock analysis latency
    pub latency_ms: u64,
    /// Headline prediction
    pub prediction: Prediction,
    /// Model metadata
    pub model: ModelInfo,
    /// Safety warnings and fallback marker
    pub safety: SafetyReport,
    /// Full decision payload
    pub data: AnalysisData,
}

/// Bounded view over one key's recent history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    /// Total entries stored under the key
    pub memory_entries: usize,
    /// The newest entries, oldest first
    pub recent_patterns: Vec<MemoryEntry>,
}

/// Status of a clear-by-key request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearStatus {
    /// The key existed and its history was dropped
    Cleared,
    /// Nothing was stored under the key
    NotFound,
}

/// Result of a clear-by-key request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearOutcome {
    /// Whether anything was cleared
    pub status: ClearStatus,
    /// Human-readable summary
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_result_wire_names() {
        assert_eq!(
            serde_json::to_string(&PrimaryResult::Blocked).unwrap(),
            "\"BLOCKED\""
        );
        assert_eq!(
            serde_json::to_string(&PrimaryResult::Error).unwrap(),
            "\"ERROR\""
        );
    }

    #[test]
    fn test_outcome_wire_names() {
        let outcome: Outcome = serde_json::from_str("\"FAILURE\"").unwrap();
        assert_eq!(outcome, Outcome::Failure);
    }

    #[test]
    fn test_feedback_details_optional() {
        let feedback: FeedbackRequest = serde_json::from_str(
            r#"{ "request_id": "req_1", "outcome": "SUCCESS" }"#,
        )
        .unwrap();
        assert_eq!(feedback.outcome, Outcome::Success);
        assert!(feedback.details.is_none());
    }

    #[test]
    fn test_model_info_kind_renames_to_type() {
        let info = ModelInfo {
            name: "m".to_string(),
            version: "1".to_string(),
            kind: "in-process".to_string(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "in-process");
    }
}
