use crate::config::constants::{
    DEFAULT_AI_TIMEOUT_SECS, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_IGNORE_FILE,
    DEFAULT_MAX_DIFF_CHARS, DEFAULT_MODEL, DEFAULT_RISK_THRESHOLD,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_risk_threshold() -> u8 {
        DEFAULT_RISK_THRESHOLD
    }

    pub fn default_max_diff_chars() -> usize {
        DEFAULT_MAX_DIFF_CHARS
    }

    pub fn default_ignore_file() -> String {
        DEFAULT_IGNORE_FILE.to_string()
    }

    pub fn default_provider() -> String {
        "openrouter".to_string()
    }

    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_AI_TIMEOUT_SECS
    }

    pub fn default_temperature() -> f32 {
        0.1
    }

    pub fn default_max_tokens() -> u32 {
        1024
    }
}
