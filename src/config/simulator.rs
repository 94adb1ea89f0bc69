//! Simulator configuration structures.

use serde::{Deserialize, Serialize};

/// Allocation policy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationPolicyConfig {
    /// Hand out the lowest-numbered free slot (nearest the entrance).
    Nearest,
    /// Hand out the highest-numbered free slot.
    Farthest,
}

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackendConfig {
    /// In-memory storage; state lives for the process lifetime.
    InMemory,
}

/// Root simulator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Allocation policy for new parks.
    #[serde(default = "default_policy")]
    pub policy: AllocationPolicyConfig,
    /// Prompt printed before each interactive command.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Storage backend selection.
    #[serde(default = "default_store")]
    pub store: StoreBackendConfig,
}

fn default_policy() -> AllocationPolicyConfig {
    AllocationPolicyConfig::Nearest
}

fn default_prompt() -> String {
    "$ ".to_owned()
}

fn default_store() -> StoreBackendConfig {
    StoreBackendConfig::InMemory
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            prompt: default_prompt(),
            store: default_store(),
        }
    }
}

impl SimulatorConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.is_empty() {
            return Err("prompt must not be empty".into());
        }
        Ok(())
    }

    /// Parse simulator configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a parse or validation failure description.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Override fields from `PARKLOT_POLICY` and `PARKLOT_PROMPT` when set.
    ///
    /// # Errors
    ///
    /// Returns a description of an unrecognized policy name.
    pub fn apply_env(&mut self) -> Result<(), String> {
        if let Ok(policy) = std::env::var("PARKLOT_POLICY") {
            self.policy = match policy.to_lowercase().as_str() {
                "nearest" => AllocationPolicyConfig::Nearest,
                "farthest" => AllocationPolicyConfig::Farthest,
                other => return Err(format!("unknown allocation policy `{other}`")),
            };
        }
        if let Ok(prompt) = std::env::var("PARKLOT_PROMPT") {
            self.prompt = prompt;
        }
        Ok(())
    }
}
