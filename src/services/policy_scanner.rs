use std::collections::BTreeSet;
use crate::helpers::diff_classifier::classify_added;
use crate::structs::rule_set::RuleSet;
use crate::structs::violation::Violation;

/// Deterministic secret scan over the lines a diff adds.
pub struct PolicyScanner {
    rule_set: RuleSet,
}

impl PolicyScanner {
    pub fn new(rule_set: RuleSet) -> Self {
        Self { rule_set }
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    pub fn scan_diff(&self, diff_text: &str) -> Vec<Violation> {
        scan(&self.rule_set, diff_text)
    }
}

/// Apply every rule, in order, to the added content of `diff_text`.
///
/// Repeated occurrences of the same text under one rule collapse into a
/// single violation; within a rule, violations are sorted lexically.
/// Zero-length matches are ignored.
pub fn scan(rule_set: &RuleSet, diff_text: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    if diff_text.is_empty() || rule_set.is_empty() {
        return violations;
    }

    let added_content = classify_added(diff_text);
    if added_content.is_empty() {
        return violations;
    }

    for rule in rule_set.iter() {
        let matches: BTreeSet<&str> = rule
            .pattern
            .find_iter(&added_content)
            .map(|m| m.as_str())
            .filter(|text| !text.is_empty())
            .collect();

        if !matches.is_empty() {
            log::debug!("Rule '{}' matched {} unique value(s)", rule.name, matches.len());
        }

        violations.extend(matches.into_iter().map(|text| Violation::new(&rule.name, text)));
    }

    violations
}
