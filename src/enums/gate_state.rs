use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Init,
    DiffLoaded,
    Scanned,
    AiPending,
    Blocked,
    Approved,
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateState::Init => "Init",
            GateState::DiffLoaded => "DiffLoaded",
            GateState::Scanned => "Scanned",
            GateState::AiPending => "AIPending",
            GateState::Blocked => "Blocked",
            GateState::Approved => "Approved",
        };
        write!(f, "{}", name)
    }
}
