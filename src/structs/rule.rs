use regex::Regex;
use crate::errors::ConfigError;

/// A named secret-detection rule with its pattern compiled at load time.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub pattern: Regex,
}

impl Rule {
    pub fn compile(name: &str, pattern: &str) -> Result<Self, ConfigError> {
        if name.trim().is_empty() {
            return Err(ConfigError::schema("Rule 'name' must be a non-empty string"));
        }

        let pattern = Regex::new(pattern).map_err(|e| ConfigError::Pattern {
            rule: name.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name: name.to_string(),
            pattern,
        })
    }
}
