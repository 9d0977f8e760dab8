use std::fmt;
use serde::Serialize;

const MAX_DISPLAY_CHARS: usize = 40;
const TRUNCATED_PREFIX_CHARS: usize = 37;
const TRUNCATION_MARKER: &str = "...";

/// One unique match of one rule in the added lines of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule_name: String,
    pub matched_text: String,
}

impl Violation {
    pub fn new(rule_name: &str, matched: &str) -> Self {
        Self {
            rule_name: rule_name.to_string(),
            matched_text: truncate_for_display(matched),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] Found pattern: {}", self.rule_name, self.matched_text)
    }
}

/// Matches longer than 40 characters keep their first 37 plus `...`.
pub fn truncate_for_display(text: &str) -> String {
    if text.chars().count() <= MAX_DISPLAY_CHARS {
        return text.to_string();
    }

    let prefix: String = text.chars().take(TRUNCATED_PREFIX_CHARS).collect();
    format!("{}{}", prefix, TRUNCATION_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_match_is_kept_verbatim() {
        let violation = Violation::new("aws-access-key", "AKIA1234567890ABCD12");
        assert_eq!(violation.matched_text, "AKIA1234567890ABCD12");
    }

    #[test]
    fn exactly_forty_chars_is_not_truncated() {
        let text = "x".repeat(40);
        assert_eq!(truncate_for_display(&text), text);
    }

    #[test]
    fn fifty_char_match_keeps_thirty_seven_plus_marker() {
        let text: String = ('a'..='z').cycle().take(50).collect();
        let shown = truncate_for_display(&text);

        assert_eq!(shown.chars().count(), 40);
        assert!(shown.ends_with("..."));
        assert_eq!(&shown[..37], &text[..37]);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "ñ".repeat(45);
        let shown = truncate_for_display(&text);
        assert_eq!(shown.chars().count(), 40);
    }

    #[test]
    fn display_names_the_rule() {
        let violation = Violation::new("hardcoded-password", "password = \"hunter2\"");
        assert_eq!(violation.to_string(), "[hardcoded-password] Found pattern: password = \"hunter2\"");
    }
}
