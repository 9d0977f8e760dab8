use crate::enums::decision::Decision;
use crate::enums::gate_outcome::{BlockReason, GateOutcome};
use crate::enums::severity::Severity;
use crate::structs::finding::Finding;
use crate::structs::rule_set::RuleSet;
use crate::structs::verdict::{Verdict, MAX_RISK_SCORE};
use crate::structs::violation::Violation;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Terminal rendering of gate results. Reads only the values it is handed.
pub struct GateReportLogger {}

impl GateReportLogger {

    pub fn print_banner() {
        println!("{}{}🛡️  OpsGuard{} {}Security Gate Active{}", BOLD, CYAN, RESET, DIM, RESET);
        println!("{}", "━".repeat(60));
    }

    pub fn print_outcome(outcome: &GateOutcome, risk_threshold: u8) {
        match outcome {
            GateOutcome::NoChanges => {
                println!("{}No changes detected.{}", YELLOW, RESET);
            }
            GateOutcome::Skipped { reason } => {
                println!("{}⏭️  Skipping gate: {}{}", YELLOW, reason, RESET);
            }
            GateOutcome::Blocked(BlockReason::Violations(violations)) => {
                Self::print_violations(violations);
                println!("\n{}{}⛔ Pipeline blocked. Remove secrets before proceeding.{}", BOLD, RED, RESET);
                println!("{}LLM analysis was NOT performed to prevent data leakage.{}", YELLOW, RESET);
            }
            GateOutcome::Blocked(BlockReason::Verdict(verdict)) => {
                Self::print_verdict(verdict, risk_threshold);
                println!("\n{}{}⛔ PIPELINE BLOCKED: review the AI findings above.{}", BOLD, RED, RESET);
            }
            GateOutcome::Approved { verdict: Some(verdict) } => {
                Self::print_verdict(verdict, risk_threshold);
                println!("\n{}{}✅ PIPELINE APPROVED (Risk Score: {}/{}){}", BOLD, GREEN, verdict.risk_score, MAX_RISK_SCORE, RESET);
            }
            GateOutcome::Approved { verdict: None } => {
                println!("{}⚠️  AI review skipped: no API credential configured.{}", YELLOW, RESET);
                println!("{}{}✅ PIPELINE APPROVED (deterministic checks only){}", BOLD, GREEN, RESET);
            }
        }
    }

    pub fn print_violations(violations: &[Violation]) {
        println!("\n{}{}🚨 SECURITY VIOLATIONS DETECTED ({}){}", BOLD, RED, violations.len(), RESET);
        println!("{}The following secrets were found in added lines:{}\n", RED, RESET);
        for violation in violations {
            println!("{}  ✗ {}{}", RED, violation, RESET);
        }
    }

    pub fn print_verdict(verdict: &Verdict, risk_threshold: u8) {
        let verdict_color = if verdict.should_block(risk_threshold) { RED } else { GREEN };

        println!("\n{}{}🧠 AI Context Analysis{}", BOLD, CYAN, RESET);
        println!("   🤖 Verdict: {}{}{}{}", BOLD, verdict_color, verdict.decision.as_str(), RESET);
        println!("   🔥 Risk Score: {}/{} (blocks at {})", verdict.risk_score, MAX_RISK_SCORE, risk_threshold);
        println!("   📝 Summary: {}", verdict.summary);

        if verdict.findings.is_empty() {
            return;
        }

        if verdict.decision == Decision::Approve && !verdict.should_block(risk_threshold) {
            println!("\n{}Minor issues noted (non-blocking):{}", YELLOW, RESET);
        } else {
            println!("\n{}{}🕵️  AI FINDINGS:{}", BOLD, RED, RESET);
        }
        println!("{}", "-".repeat(60));
        for finding in &verdict.findings {
            Self::print_finding(finding);
        }
        println!("{}", "-".repeat(60));
    }

    fn print_finding(finding: &Finding) {
        let color = match finding.severity {
            Severity::Critical | Severity::High => RED,
            Severity::Medium => YELLOW,
            Severity::Low => CYAN,
            Severity::Unknown => DIM,
        };

        println!("  {}{}[{:<8}]{} {}", BOLD, color, finding.severity.name(), RESET, finding.description);
        println!("  {}           File: {}  Line: {}{}", DIM, finding.file, finding.location, RESET);
    }

    pub fn print_rule_set(rule_set: &RuleSet) {
        println!("\n📋 Blocklist rules ({}):", rule_set.len());
        if rule_set.is_empty() {
            println!("   {}(none: the deterministic phase will never block){}", YELLOW, RESET);
        }
        for (i, rule) in rule_set.iter().enumerate() {
            println!("  {}. {} {}{}{}", i + 1, rule.name, DIM, rule.pattern.as_str(), RESET);
        }
    }
}
