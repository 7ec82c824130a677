//! Service configuration

use serde::{Deserialize, Serialize};

/// Configuration for [`NileLinkAi`](crate::NileLinkAi)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Model name stamped on every envelope
    pub model_name: String,
    /// Model version stamped on every envelope
    pub model_version: String,
    /// Environment label stamped on every envelope
    pub environment: String,
    /// How many recent entries a memory snapshot returns
    pub recent_window: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model_name: "NeuralMesh-Orchestrator".to_string(),
            model_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "decentralized".to_string(),
            recent_window: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model_name, "NeuralMesh-Orchestrator");
        assert_eq!(config.recent_window, 5);
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: AiConfig =
            serde_json::from_str(r#"{ "recent_window": 10 }"#).unwrap();
        assert_eq!(config.recent_window, 10);
        assert_eq!(config.environment, "decentralized");
    }
}
