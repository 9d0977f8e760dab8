use serde::Deserialize;

/// Error envelope returned by OpenAI-compatible endpoints.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorBody {
    pub error: ApiError,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiError {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

impl ApiErrorBody {
    /// Best-effort extraction of a readable message from an error response body.
    pub fn message_from(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => match parsed.error.error_type {
                Some(kind) => format!("{}: {}", kind, parsed.error.message),
                None => parsed.error.message,
            },
            Err(_) => body.trim().to_string(),
        }
    }
}
