use std::fs;
use std::path::Path;
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::errors::ConfigError;
use crate::structs::config::policy_config::PolicyConfig;
use crate::structs::rule_set::RuleSet;
use crate::structs::verdict::MAX_RISK_SCORE;

const GATE_KEY: &str = "gate";
const AI_KEY: &str = "ai";

/// Providers speaking the OpenAI chat-completions protocol.
const SUPPORTED_PROVIDERS: &[&str] = &["openrouter", "openai"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Toml => "TOML",
        }
    }
}

pub struct ConfigManager;

impl ConfigManager {

    pub fn load(config_path: &str) -> Result<PolicyConfig, ConfigError> {
        let path = Path::new(config_path);

        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: config_path.to_string(),
                reason: "no such file".to_string(),
            });
        }

        log::info!("📋 Loading security policy from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| ConfigError::NotFound {
            path: config_path.to_string(),
            reason: e.to_string(),
        })?;

        let config = Self::parse(&content, ConfigFormat::from_path(path))?;
        log::info!("🛡️ Loaded {} blocklist rules", config.rule_set.len());
        Ok(config)
    }

    pub fn load_rule_set(config_path: &str) -> Result<RuleSet, ConfigError> {
        Self::load(config_path).map(|config| config.rule_set)
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<PolicyConfig, ConfigError> {
        let document = Self::parse_document(content, format)?;

        let rule_set = RuleSet::from_document(&document)?;
        let gate = Self::section(&document, GATE_KEY)?;
        let ai = Self::section(&document, AI_KEY)?;

        let config = PolicyConfig { rule_set, gate, ai };
        Self::validate_config(&config)?;
        Ok(config)
    }

    fn parse_document(content: &str, format: ConfigFormat) -> Result<Value, ConfigError> {
        let parsed = match format {
            ConfigFormat::Yaml => serde_yaml::from_str::<Value>(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str::<Value>(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| ConfigError::Malformed {
            format: format.name(),
            reason,
        })
    }

    fn section<T: DeserializeOwned + Default>(document: &Value, key: &str) -> Result<T, ConfigError> {
        match document.get(key) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| ConfigError::schema(format!("Invalid '{}' section: {}", key, e))),
        }
    }

    pub fn validate_config(config: &PolicyConfig) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if config.gate.risk_threshold > MAX_RISK_SCORE {
            errors.push(format!("gate.risk_threshold must be between 0 and {}", MAX_RISK_SCORE));
        }

        if config.gate.max_diff_chars == 0 {
            errors.push("gate.max_diff_chars must be greater than 0".to_string());
        }

        if !SUPPORTED_PROVIDERS.contains(&config.ai.provider.as_str()) {
            errors.push(format!(
                "ai.provider '{}' is not supported (expected one of: {})",
                config.ai.provider,
                SUPPORTED_PROVIDERS.join(", ")
            ));
        }

        if config.ai.timeout_secs == 0 {
            errors.push("ai.timeout_secs must be greater than 0".to_string());
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::schema(errors.join("; ")))
        }
    }

    pub fn create_sample_config(config_path: &str) -> Result<(), std::io::Error> {
        let sample_config = r#"# OpsGuard security policy
#
# Rules are matched against the lines a change ADDS. Any match blocks the
# pipeline before the diff is sent for AI review.
blocklist:
  - name: aws-access-key
    pattern: 'AKIA[0-9A-Z]{16}'
  - name: private-key-block
    pattern: '-----BEGIN [A-Z ]*PRIVATE KEY-----'
  - name: hardcoded-password
    pattern: '(?i)password\s*[:=]\s*["''][^"'']+["'']'
  - name: generic-api-token
    pattern: '(?i)(api[_-]?key|secret|token)\s*[:=]\s*["''][A-Za-z0-9_\-]{16,}["'']'

# Gate policy
gate:
  # Block when the AI risk score (0-10) is at or above this value
  risk_threshold: 7
  # Only this many characters of the diff are sent for AI review
  max_diff_chars: 30000
  ignore_file: .opsguardignore

# AI review (OpenAI-compatible chat completions endpoint)
ai:
  provider: openrouter
  base_url: https://openrouter.ai/api/v1
  model: google/gemini-2.0-flash-001
  api_key_env: OPENROUTER_API_KEY
  timeout_secs: 60
  temperature: 0.1
  max_tokens: 1024
"#;
        let path = Path::new(config_path);
        if path.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            ));
        }

        fs::write(path, sample_config)?;
        log::info!("✅ Created sample policy at: {}", path.display());
        Ok(())
    }
}
