use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(default = "Finding::unknown_file")]
    pub file: String,

    #[serde(default = "Finding::unknown_location", alias = "line", deserialize_with = "Finding::location_from_any")]
    pub location: String,

    #[serde(default)]
    pub severity: Severity,

    #[serde(alias = "issue")]
    pub description: String,
}

impl Finding {
    fn unknown_file() -> String {
        "-".to_string()
    }

    fn unknown_location() -> String {
        "?".to_string()
    }

    // Models answer with either a line number or a code snippet here.
    fn location_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => Self::unknown_location(),
            other => other.to_string(),
        })
    }
}
