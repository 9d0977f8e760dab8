use thiserror::Error;

/// Failures while turning the policy document into a RuleSet.
///
/// Every variant is fatal: a rule that failed to load is a rule that never
/// scans, so the gate refuses to run on a partial policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found or unreadable: {path} ({reason})")]
    NotFound { path: String, reason: String },

    #[error("Invalid {format} in configuration: {reason}")]
    Malformed { format: &'static str, reason: String },

    #[error("Invalid configuration schema: {0}")]
    Schema(String),

    #[error("Invalid regex in rule '{rule}': {reason}")]
    Pattern { rule: String, reason: String },
}

impl ConfigError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }
}

#[derive(Debug, Error)]
pub enum GitError {
    #[error("Invalid git repository at '{path}': {reason}")]
    InvalidRepository { path: String, reason: String },

    #[error("git {command} failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("CI event payload error: {0}")]
    EventPayload(String),
}

#[derive(Debug, Error)]
pub enum OpsGuardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OpsGuardError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(_) => ErrorSeverity::High,
            Self::Git(GitError::EventPayload(_)) => ErrorSeverity::Medium,
            Self::Git(_) => ErrorSeverity::High,
            Self::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "Security Policy Error",
            Self::Git(_) => "Git Error",
            Self::Io(_) => "System Error",
        }
    }

    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(ConfigError::NotFound { .. }) => {
                Some("Run 'opsguard init' to create a starter policy file")
            }
            Self::Config(ConfigError::Pattern { .. }) => {
                Some("Fix the pattern syntax; the gate will not run with a rule it cannot compile")
            }
            Self::Config(_) => Some("Run 'opsguard validate' to check the policy document"),
            Self::Git(GitError::InvalidRepository { .. }) => {
                Some("Pass --path pointing at a git work tree")
            }
            Self::Git(GitError::EventPayload(_)) => {
                Some("Check GITHUB_EVENT_PATH and that the workflow runs on pull_request events")
            }
            _ => None,
        }
    }
}

/// Result type alias for gate operations
pub type OpsGuardResult<T> = Result<T, OpsGuardError>;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message for a fatal error.
    pub fn handle_error(error: &OpsGuardError) {
        let severity = error.severity();

        log::error!("[{}] {:?}", severity.name(), error);

        eprintln!("{} {}: {}", severity.emoji(), error.label(), error);
        if let Some(suggestion) = error.suggestion() {
            eprintln!("💡 Suggestion: {}", suggestion);
        }
    }
}
