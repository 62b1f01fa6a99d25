use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::EditorError;

/// Editor session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// How long the "was validated" flag stays on after a validation
    pub validation_flag_timeout_ms: u64,

    /// Seconds the save action stays disabled after the form loads
    pub save_cooldown_secs: u64,

    /// Maximum number of history snapshots kept (0 = unlimited)
    pub history_limit: usize,

    /// Message shown for a valid outline
    pub valid_message: String,

    /// Prefix of the message shown for an invalid outline
    pub invalid_message: String,
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validation_flag_timeout(&self) -> Duration {
        Duration::from_millis(self.validation_flag_timeout_ms)
    }

    pub fn save_cooldown(&self) -> Duration {
        Duration::from_secs(self.save_cooldown_secs)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            validation_flag_timeout_ms: 5000,
            save_cooldown_secs: 5,
            history_limit: 0,
            valid_message: "valid roadmap".to_string(),
            invalid_message: "invalid indentation".to_string(),
        }
    }
}
