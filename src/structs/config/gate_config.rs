use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    /// Block when the AI risk score reaches this value.
    #[serde(default = "ConfigHelper::default_risk_threshold")]
    pub risk_threshold: u8,

    /// Ceiling, in characters, on the diff prefix sent to the AI.
    #[serde(default = "ConfigHelper::default_max_diff_chars")]
    pub max_diff_chars: usize,

    #[serde(default = "ConfigHelper::default_ignore_file")]
    pub ignore_file: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            risk_threshold: ConfigHelper::default_risk_threshold(),
            max_diff_chars: ConfigHelper::default_max_diff_chars(),
            ignore_file: ConfigHelper::default_ignore_file(),
        }
    }
}
