pub mod ai_provider_error;
pub mod commands;
pub mod decision;
pub mod gate_outcome;
pub mod gate_state;
pub mod resolution;
pub mod severity;
