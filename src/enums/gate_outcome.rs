use crate::structs::verdict::Verdict;
use crate::structs::violation::Violation;

#[derive(Debug, Clone, PartialEq)]
pub enum BlockReason {
    /// Deterministic rule matches. The AI phase never ran.
    Violations(Vec<Violation>),
    /// The semantic review decided to block, or scored at/above the threshold.
    Verdict(Verdict),
}

/// Terminal result of one gate run.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    NoChanges,
    Skipped { reason: String },
    Blocked(BlockReason),
    /// `verdict` is `None` when the AI phase was skipped for lack of credentials.
    Approved { verdict: Option<Verdict> },
}

impl GateOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            GateOutcome::Blocked(_) => 1,
            GateOutcome::NoChanges | GateOutcome::Skipped { .. } | GateOutcome::Approved { .. } => 0,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, GateOutcome::Blocked(_))
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            GateOutcome::Blocked(BlockReason::Violations(violations)) => violations,
            _ => &[],
        }
    }
}
