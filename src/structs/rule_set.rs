use std::collections::HashSet;
use serde_json::Value;
use crate::errors::ConfigError;
use crate::structs::rule::Rule;

pub const BLOCKLIST_KEY: &str = "blocklist";

/// Compiled rules in configuration order. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Validate the `blocklist` section of an already-parsed policy document
    /// and compile every entry. The first bad entry aborts the whole load.
    pub fn from_document(document: &Value) -> Result<Self, ConfigError> {
        let blocklist = document
            .as_object()
            .and_then(|root| root.get(BLOCKLIST_KEY))
            .ok_or_else(|| ConfigError::schema("Configuration must contain a 'blocklist' section"))?;

        let entries = blocklist
            .as_array()
            .ok_or_else(|| ConfigError::schema("'blocklist' must be a list of rules"))?;

        let mut rules = Vec::with_capacity(entries.len());
        let mut seen = HashSet::new();

        for (index, entry) in entries.iter().enumerate() {
            let entry = entry
                .as_object()
                .ok_or_else(|| ConfigError::schema(format!("Rule #{} must be a mapping", index + 1)))?;

            let name = entry.get("name").and_then(Value::as_str);
            let pattern = entry.get("pattern").and_then(Value::as_str);

            let (name, pattern) = match (name, pattern) {
                (Some(name), Some(pattern)) => (name, pattern),
                _ => {
                    return Err(ConfigError::schema(format!(
                        "Rule #{} must have string 'name' and 'pattern' fields",
                        index + 1
                    )))
                }
            };

            if !seen.insert(name.to_string()) {
                return Err(ConfigError::schema(format!("Duplicate rule name: {}", name)));
            }

            rules.push(Rule::compile(name, pattern)?);
        }

        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name.as_str()).collect()
    }
}
