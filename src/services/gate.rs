use std::sync::Arc;
use crate::enums::gate_outcome::{BlockReason, GateOutcome};
use crate::enums::gate_state::GateState;
use crate::enums::resolution::Resolution;
use crate::errors::GitError;
use crate::services::ignore_filter::IgnoreFilter;
use crate::services::policy_scanner::PolicyScanner;
use crate::traits::diff_provider::DiffProvider;
use crate::traits::verdict_provider::VerdictProvider;

/// Two-phase allow/block decision for one change set.
///
/// Deterministic rules run first. Any violation blocks immediately and the
/// diff is never handed to the verdict provider. Only a clean diff goes on to
/// the semantic review.
pub struct Gate {
    scanner: PolicyScanner,
    provider: Option<Arc<dyn VerdictProvider>>,
    risk_threshold: u8,
}

impl Gate {
    /// `provider` is `None` when no API credential is configured; the AI phase
    /// is then skipped and a clean scan approves.
    pub fn new(scanner: PolicyScanner, provider: Option<Arc<dyn VerdictProvider>>, risk_threshold: u8) -> Self {
        Self {
            scanner,
            provider,
            risk_threshold,
        }
    }

    pub async fn evaluate(&self, source: Resolution<String>) -> GateOutcome {
        let diff = match source {
            Resolution::Skip(reason) => {
                log::info!("⏭️ Nothing to gate: {}", reason);
                return GateOutcome::Skipped { reason };
            }
            Resolution::Ready(diff) if diff.trim().is_empty() => {
                log::info!("No changes detected.");
                return GateOutcome::NoChanges;
            }
            Resolution::Ready(diff) => diff,
        };
        transition(GateState::Init, GateState::DiffLoaded);

        let violations = self.scanner.scan_diff(&diff);
        transition(GateState::DiffLoaded, GateState::Scanned);

        if !violations.is_empty() {
            transition(GateState::Scanned, GateState::Blocked);
            log::warn!("🚨 {} blocklist violation(s); AI analysis will not run", violations.len());
            return GateOutcome::Blocked(BlockReason::Violations(violations));
        }

        log::info!("✅ Regex check passed: no hardcoded secrets detected");

        let Some(provider) = self.provider.as_ref() else {
            log::warn!("⚠️ No AI credential configured; semantic review skipped");
            transition(GateState::Scanned, GateState::Approved);
            return GateOutcome::Approved { verdict: None };
        };

        transition(GateState::Scanned, GateState::AiPending);
        let verdict = provider.analyze(&diff).await;

        if verdict.should_block(self.risk_threshold) {
            transition(GateState::AiPending, GateState::Blocked);
            GateOutcome::Blocked(BlockReason::Verdict(verdict))
        } else {
            transition(GateState::AiPending, GateState::Approved);
            GateOutcome::Approved { verdict: Some(verdict) }
        }
    }
}

fn transition(from: GateState, to: GateState) {
    log::debug!("gate: {} -> {}", from, to);
}

/// Fetch the diff for the changed files that survive the ignore filter.
///
/// Filtering happens on the file list, before any diff text is produced.
/// When nothing is filtered out the full diff is requested directly.
pub fn load_diff(provider: &dyn DiffProvider, filter: &IgnoreFilter) -> Result<Resolution<String>, GitError> {
    let files = match provider.changed_files()? {
        Resolution::Ready(files) => files,
        Resolution::Skip(reason) => return Ok(Resolution::Skip(reason)),
    };

    let total = files.len();
    let kept = filter.filter(files);

    if kept.len() == total {
        provider.full_diff()
    } else {
        provider.diff_for_files(&kept)
    }
}
