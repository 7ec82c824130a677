//! The NileLink AI service facade
//!
//! Wires the guard, simulator, orchestrator, fraud model and decision
//! memory into the public analyze / feedback surface. Constructed per
//! deployment and passed by reference; there is no global instance.

use crate::config::AiConfig;
use crate::envelope::{
    AnalysisData, AnalyzeRequest, BlockedDecision, ClearOutcome, ClearStatus, FeedbackRequest,
    LearnResult, MemorySnapshot, ModelInfo, Outcome, Prediction, PredictionEnvelope,
    PrimaryResult, ProcessResponse, SafetyReport,
};
use crate::error::AiError;
use chrono::Utc;
use nilelink_core::{
    AgentResponse, AgentRole, Decision, FraudModel, FraudPrediction, FraudWeights,
    TransactionData, UserContext,
};
use nilelink_persist::{DecisionStore, MemoryEntry, MemoryKey};
use nilelink_runtime::{
    DecisionOrchestrator, FutureSimulationEngine, GuardedAction, PolicyEthicsGuard,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Deployment kind stamped into envelope model metadata
const MODEL_KIND: &str = "in-process";

/// The NileLink AI decision service
#[derive(Debug)]
pub struct NileLinkAi {
    config: AiConfig,
    orchestrator: DecisionOrchestrator,
    simulator: FutureSimulationEngine,
    guard: PolicyEthicsGuard,
    fraud: RwLock<FraudModel>,
    store: Arc<dyn DecisionStore>,
}

impl NileLinkAi {
    /// Service over the standard agent panel and the given memory store
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self::with_config(AiConfig::default(), store)
    }

    /// Service with explicit configuration
    pub fn with_config(config: AiConfig, store: Arc<dyn DecisionStore>) -> Self {
        Self {
            config,
            orchestrator: DecisionOrchestrator::new(),
            simulator: FutureSimulationEngine::new(),
            guard: PolicyEthicsGuard::new(),
            fraud: RwLock::new(FraudModel::new()),
            store,
        }
    }

    /// Main processing pipeline: simulate, guard, orchestrate, remember.
    ///
    /// A guard veto short-circuits before any agent runs and is never
    /// written to memory. A memory failure is logged and swallowed; the
    /// returned decision is already complete at that point.
    pub async fn process_request(
        &self,
        data: &TransactionData,
        user_context: &UserContext,
        request_id: Option<String>,
    ) -> ProcessResponse {
        let context = user_context.resolve();

        let simulations = self.simulator.simulate_futures(&context, data);

        let verdict =
            self.guard
                .check_action(GuardedAction::ProcessTransaction, &context, data);
        if !verdict.approved {
            tracing::info!(
                role = %context.user_role,
                violations = verdict.violations.len(),
                "policy guard blocked request"
            );
            return ProcessResponse {
                success: false,
                data: AnalysisData::Blocked(BlockedDecision {
                    decision: Decision::Blocked,
                    reason: verdict.reasoning,
                    violations: verdict.violations,
                }),
            };
        }

        let mut result = self.orchestrator.coordinate_decision(&context, data);
        result.future_simulations = Some(simulations);

        let request_id = request_id.unwrap_or_else(new_request_id);
        let entry = MemoryEntry::new(request_id, context, data.clone(), result.clone());
        if let Err(err) = self.store.append(entry).await {
            tracing::warn!(%err, store = self.store.name(), "failed to persist decision memory");
        }

        ProcessResponse {
            success: true,
            data: AnalysisData::Decision(Box::new(result)),
        }
    }

    /// Reinforcement loop: compare a reported outcome against the stored
    /// decision and nudge fraud sensitivity accordingly.
    pub async fn learn_from_outcome(&self, feedback: &FeedbackRequest) -> LearnResult {
        let entry = match self.store.find_by_request_id(&feedback.request_id).await {
            Ok(Some(entry)) => entry,
            Ok(None) => return LearnResult::NotFound,
            Err(err) => {
                tracing::warn!(
                    %err,
                    request_id = %feedback.request_id,
                    "memory lookup failed during feedback"
                );
                return LearnResult::NotFound;
            }
        };

        match (feedback.outcome, entry.result.decision) {
            (Outcome::Failure, Decision::Approve) => {
                self.fraud.write().await.adjust_weights(true);
                tracing::info!(
                    request_id = %feedback.request_id,
                    "approved transaction failed; sensitivity increased"
                );
                LearnResult::SensitivityIncreased
            }
            (Outcome::Success, Decision::Review) => {
                self.fraud.write().await.adjust_weights(false);
                tracing::info!(
                    request_id = %feedback.request_id,
                    "reviewed transaction succeeded; sensitivity decreased"
                );
                LearnResult::SensitivityDecreased
            }
            _ => LearnResult::NoAdjustment,
        }
    }

    /// Analyze a loose request and wrap the result in a prediction
    /// envelope. Never fails: internal errors become an ERROR envelope
    /// with `fallback_applied` set.
    pub async fn analyze_transaction(&self, request: &AnalyzeRequest) -> PredictionEnvelope {
        let started = Instant::now();
        let request_id = new_request_id();

        match self.try_analyze(request, &request_id).await {
            Ok(mut envelope) => {
                envelope.latency_ms = elapsed_ms(started);
                envelope
            }
            Err(err) => {
                tracing::warn!(%err, %request_id, "analysis failed; returning fallback envelope");
                PredictionEnvelope {
                    success: false,
                    request_id: None,
                    timestamp: Utc::now(),
                    environment: self.config.environment.clone(),
                    latency_ms: elapsed_ms(started),
                    prediction: Prediction {
                        primary_result: PrimaryResult::Error,
                        confidence_score: 0.0,
                        explanation: format!("Analysis failed: {err}"),
                    },
                    model: self.model_info(),
                    safety: SafetyReport {
                        warnings: vec![format!("Internal error: {err}")],
                        fallback_applied: true,
                    },
                    data: AnalysisData::Error {
                        error: err.to_string(),
                        decision: PrimaryResult::Error,
                    },
                }
            }
        }
    }

    async fn try_analyze(
        &self,
        request: &AnalyzeRequest,
        request_id: &str,
    ) -> Result<PredictionEnvelope, AiError> {
        let data: TransactionData = serde_json::from_value(request.data.clone())?;
        let user_context: UserContext = if request.context.is_null() {
            UserContext::default()
        } else {
            serde_json::from_value(request.context.clone())?
        };

        let response = self
            .process_request(&data, &user_context, Some(request_id.to_string()))
            .await;

        let (primary_result, risk_label, confidence) = match &response.data {
            AnalysisData::Decision(result) => (
                PrimaryResult::from(result.decision),
                result.risk_level.to_string(),
                mean_confidence(&result.agent_insights),
            ),
            AnalysisData::Blocked(blocked) => (
                PrimaryResult::from(blocked.decision),
                "UNKNOWN".to_string(),
                0.0,
            ),
            AnalysisData::Error { .. } => {
                (PrimaryResult::Error, "UNKNOWN".to_string(), 0.0)
            }
        };

        Ok(PredictionEnvelope {
            success: response.success,
            request_id: Some(request_id.to_string()),
            timestamp: Utc::now(),
            environment: self.config.environment.clone(),
            latency_ms: 0, // stamped by the caller once the clock stops
            prediction: Prediction {
                primary_result,
                confidence_score: round4(confidence),
                explanation: format!(
                    "System analyzed transaction with {risk_label} risk level."
                ),
            },
            model: self.model_info(),
            safety: SafetyReport::default(),
            data: response.data,
        })
    }

    /// Count and recent window for one `(role, system_state)` history
    pub async fn get_memory(
        &self,
        user_role: &str,
        system_state: &str,
    ) -> Result<MemorySnapshot, AiError> {
        let key = MemoryKey::new(user_role, system_state);
        let entries = self.store.entries(&key).await?;
        let skip = entries.len().saturating_sub(self.config.recent_window);
        Ok(MemorySnapshot {
            memory_entries: entries.len(),
            recent_patterns: entries.into_iter().skip(skip).collect(),
        })
    }

    /// Drop one key's history
    pub async fn clear_memory(
        &self,
        user_role: &str,
        system_state: &str,
    ) -> Result<ClearOutcome, AiError> {
        let key = MemoryKey::new(user_role, system_state);
        if self.store.clear(&key).await? {
            Ok(ClearOutcome {
                status: ClearStatus::Cleared,
                message: format!("Memory cleared for {key}"),
            })
        } else {
            Ok(ClearOutcome {
                status: ClearStatus::NotFound,
                message: format!("No memory found for {key}"),
            })
        }
    }

    /// Score a transaction with the parallel fraud scorer
    pub async fn fraud_score(&self, data: &TransactionData) -> FraudPrediction {
        self.fraud.read().await.predict(data)
    }

    /// Snapshot of the current fraud weights
    pub async fn fraud_weights(&self) -> FraudWeights {
        self.fraud.read().await.weights()
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo {
            name: self.config.model_name.clone(),
            version: self.config.model_version.clone(),
            kind: MODEL_KIND.to_string(),
        }
    }
}

fn mean_confidence(insights: &BTreeMap<AgentRole, AgentResponse>) -> f64 {
    if insights.is_empty() {
        return 0.0;
    }
    insights.values().map(|r| r.confidence).sum::<f64>() / insights.len() as f64
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn new_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
