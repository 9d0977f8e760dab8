pub mod ai_config;
pub mod gate_config;
pub mod policy_config;
