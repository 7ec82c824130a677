//! Transaction payloads evaluated by the decision pipeline
//!
//! Every field is optional on the wire; missing values take the documented
//! defaults so evaluation never fails on a sparse payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Country sentinel for payloads that carry no geo information
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Chaos scenario injected by resilience drills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChaosKind {
    /// A node dropped out of the mesh
    NodeFailure,
    /// Degraded network round-trips
    NetworkLatency,
}

impl fmt::Display for ChaosKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeFailure => write!(f, "NODE_FAILURE"),
            Self::NetworkLatency => write!(f, "NETWORK_LATENCY"),
        }
    }
}

/// Behavioral clustering inputs, each on a 0.0 - 1.0 scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorFactors {
    /// How often the user orders
    pub order_frequency: f64,
    /// How the user's spend compares to their segment
    pub spending_pattern: f64,
    /// Consecutive-activity streak
    pub loyalty_streak: f64,
}

/// A transaction under evaluation
///
/// The snake_case aliases accept payloads produced by older clients that
/// predate the camelCase wire convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionData {
    /// Transaction value in `currency`
    pub amount: f64,
    /// ISO currency code
    pub currency: String,
    /// Identifier of the paying user
    pub user_id: String,
    /// Account age in days
    pub user_age_days: u32,
    /// Number of transactions in the user's recent history
    pub txn_history_count: u32,
    /// Country resolved from the client IP
    pub ip_country: String,
    /// Country on the billing profile
    pub billing_country: String,
    /// When the transaction was initiated
    pub timestamp: Option<DateTime<Utc>>,
    /// Merchant receiving the payment
    pub merchant_id: Option<String>,
    /// Line items in the order
    pub items: Vec<String>,
    /// Settlement region code (e.g. "AE", "SA", "EG")
    pub region: String,
    /// Observed FX volatility for `currency` (fraction, 0.10 = 10%)
    #[serde(alias = "fx_delta")]
    pub fx_delta: f64,
    /// Caller-asserted high-risk flag; gates on elevated roles
    #[serde(alias = "high_risk")]
    pub high_risk: bool,
    /// Store-side low-inventory flag
    #[serde(alias = "inventory_low")]
    pub inventory_low: bool,
    /// Whether a chaos drill is in progress
    #[serde(alias = "is_chaos")]
    pub is_chaos: bool,
    /// Which chaos scenario is being drilled
    #[serde(alias = "chaos_type")]
    pub chaos_type: Option<ChaosKind>,
    /// Cluster load relative to baseline (1.0 = nominal)
    #[serde(alias = "load_factor")]
    pub load_factor: f64,
    /// Order volume over the recent window
    #[serde(alias = "recent_volume")]
    pub recent_volume: u32,
    /// Behavioral clustering inputs
    pub factors: BehaviorFactors,
    /// Concerns carried over from an earlier screening pass; drives the
    /// future-simulation baseline when present
    #[serde(rename = "concerns")]
    pub prior_concerns: Option<Vec<String>>,
}

impl Default for TransactionData {
    fn default() -> Self {
        Self {
            amount: 0.0,
            currency: "USD".to_string(),
            user_id: String::new(),
            user_age_days: 0,
            txn_history_count: 0,
            ip_country: UNKNOWN_COUNTRY.to_string(),
            billing_country: UNKNOWN_COUNTRY.to_string(),
            timestamp: None,
            merchant_id: None,
            items: Vec::new(),
            region: "UNKNOWN".to_string(),
            fx_delta: 0.0,
            high_risk: false,
            inventory_low: false,
            is_chaos: false,
            chaos_type: None,
            load_factor: 1.0,
            recent_volume: 0,
            factors: BehaviorFactors::default(),
            prior_concerns: None,
        }
    }
}

impl TransactionData {
    /// Whether the IP country contradicts the billing country. An unknown
    /// IP country never counts as a mismatch.
    pub fn geo_mismatch(&self) -> bool {
        self.ip_country != self.billing_country && self.ip_country != UNKNOWN_COUNTRY
    }

    /// Approximate serialized payload size in bytes
    pub fn payload_size(&self) -> usize {
        serde_json::to_string(self).map(|s| s.len()).unwrap_or_default()
    }
}
