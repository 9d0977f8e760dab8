use std::error::Error;
use std::fmt;

/// Failures of the remote verdict call. Never surfaced as a process error:
/// the provider folds every variant into a fail-closed verdict.
#[derive(Debug, Clone)]
pub enum AiProviderError {
    ApiError(String),
    NetworkError(String),
    Timeout(String),
    SerializationError(String),
    AuthenticationError(String),
    SchemaViolation(String),
}

impl AiProviderError {
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            AiProviderError::Timeout(error.to_string())
        } else if error.is_decode() {
            AiProviderError::SerializationError(error.to_string())
        } else {
            AiProviderError::NetworkError(error.to_string())
        }
    }
}

impl fmt::Display for AiProviderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AiProviderError::ApiError(msg) => write!(f, "AI API Error: {}", msg),
            AiProviderError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AiProviderError::Timeout(msg) => write!(f, "Request Timed Out: {}", msg),
            AiProviderError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
            AiProviderError::AuthenticationError(msg) => write!(f, "Authentication Error: {}", msg),
            AiProviderError::SchemaViolation(msg) => write!(f, "Response Schema Violation: {}", msg),
        }
    }
}

impl Error for AiProviderError {}
