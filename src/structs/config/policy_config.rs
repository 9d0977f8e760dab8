use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::gate_config::GateConfig;
use crate::structs::rule_set::RuleSet;

/// Fully validated policy document.
#[derive(Debug, Clone, Default)]
pub struct PolicyConfig {
    pub rule_set: RuleSet,
    pub gate: GateConfig,
    pub ai: AiConfig,
}
