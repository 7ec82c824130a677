//! Request context types
//!
//! [`UserContext`] is the loose, all-optional shape supplied by callers;
//! [`ContextData`] is the resolved, immutable form the pipeline consumes.
//! Defaults are applied once at the boundary, never inline in the logic.

use serde::{Deserialize, Serialize};

/// Role assumed when the caller supplies none
pub const DEFAULT_ROLE: &str = "customer";
/// Environment assumed when the caller supplies none
pub const DEFAULT_ENVIRONMENT: &str = "online";
/// System surface assumed when the caller supplies none
pub const DEFAULT_SYSTEM_STATE: &str = "marketplace";
/// Urgency assumed when the caller supplies none (1-10 scale)
pub const DEFAULT_URGENCY: u8 = 5;

/// Caller-supplied context with every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContext {
    /// Role of the acting user (e.g. "customer", "admin", "owner")
    pub role: Option<String>,
    /// Operating environment: online/offline/stable/crisis
    pub environment: Option<String>,
    /// Which surface the request came from: POS/marketplace/wallet
    pub system_state: Option<String>,
    /// Observed emotional signals (e.g. "stress")
    pub emotional_signals: Option<Vec<String>>,
    /// Urgency on a 1-10 scale
    pub urgency_level: Option<u8>,
}

impl UserContext {
    /// Resolve into [`ContextData`], filling every missing field with its
    /// documented default.
    pub fn resolve(&self) -> ContextData {
        ContextData {
            user_role: self
                .role
                .clone()
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            environment: self
                .environment
                .clone()
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            system_state: self
                .system_state
                .clone()
                .unwrap_or_else(|| DEFAULT_SYSTEM_STATE.to_string()),
            emotional_signals: self.emotional_signals.clone().unwrap_or_default(),
            urgency_level: self.urgency_level.unwrap_or(DEFAULT_URGENCY),
        }
    }
}

/// Resolved per-request context, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextData {
    /// Role of the acting user
    pub user_role: String,
    /// Operating environment
    pub environment: String,
    /// Active system surface
    pub system_state: String,
    /// Observed emotional signals
    pub emotional_signals: Vec<String>,
    /// Urgency on a 1-10 scale
    pub urgency_level: u8,
}

impl ContextData {
    /// Whether the given emotional signal was observed
    pub fn has_signal(&self, signal: &str) -> bool {
        self.emotional_signals.iter().any(|s| s == signal)
    }
}
