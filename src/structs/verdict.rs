use serde::{Deserialize, Serialize};
use crate::enums::decision::Decision;
use crate::structs::finding::Finding;

pub const MAX_RISK_SCORE: u8 = 10;

/// Structured result of the semantic review, or its fail-closed stand-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub decision: Decision,
    pub risk_score: u8,
    pub summary: String,
    pub findings: Vec<Finding>,
}

impl Verdict {
    /// The verdict used whenever the engine errors or answers off-schema.
    pub fn fail_closed(reason: &str) -> Self {
        Self {
            decision: Decision::Block,
            risk_score: MAX_RISK_SCORE,
            summary: reason.to_string(),
            findings: Vec::new(),
        }
    }

    pub fn should_block(&self, risk_threshold: u8) -> bool {
        self.decision == Decision::Block || self.risk_score >= risk_threshold
    }
}
