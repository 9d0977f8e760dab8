use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::decision::Decision;
use crate::structs::finding::Finding;
use crate::structs::verdict::{Verdict, MAX_RISK_SCORE};

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$").expect("code fence pattern is valid")
});

#[derive(Deserialize)]
struct RawVerdict {
    #[serde(alias = "verdict")]
    decision: Decision,
    #[serde(alias = "riskScore")]
    risk_score: u8,
    #[serde(alias = "explanation")]
    summary: String,
    #[serde(default)]
    findings: Option<Vec<Finding>>,
}

/// Parse the model's answer into a `Verdict`.
///
/// Accepts the prompt's field names (`verdict`, `explanation`, `line`,
/// `issue`) and the normalized ones. Any other shape, including a top-level
/// array, is a `SchemaViolation`; callers fail closed on it.
pub fn parse_verdict(raw: &str) -> Result<Verdict, AiProviderError> {
    let content = strip_code_fence(raw);

    let value: Value = serde_json::from_str(content)
        .map_err(|e| AiProviderError::SerializationError(format!("AI output is not JSON: {}", e)))?;

    if !value.is_object() {
        return Err(AiProviderError::SchemaViolation(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }

    let parsed: RawVerdict = serde_json::from_value(value)
        .map_err(|e| AiProviderError::SchemaViolation(e.to_string()))?;

    if parsed.risk_score > MAX_RISK_SCORE {
        return Err(AiProviderError::SchemaViolation(format!(
            "risk_score {} is outside 0..={}",
            parsed.risk_score, MAX_RISK_SCORE
        )));
    }

    Ok(Verdict {
        decision: parsed.decision,
        risk_score: parsed.risk_score,
        summary: parsed.summary,
        findings: parsed.findings.unwrap_or_default(),
    })
}

fn strip_code_fence(raw: &str) -> &str {
    match CODE_FENCE.captures(raw).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str(),
        None => raw.trim(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
