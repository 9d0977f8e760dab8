use std::cell::RefCell;
use std::sync::Arc;

use opsguard::enums::decision::Decision;
use opsguard::enums::gate_outcome::{BlockReason, GateOutcome};
use opsguard::enums::resolution::Resolution;
use opsguard::errors::GitError;
use opsguard::services::gate::{load_diff, Gate};
use opsguard::services::ignore_filter::IgnoreFilter;
use opsguard::services::policy_scanner::PolicyScanner;
use opsguard::structs::verdict::Verdict;
use opsguard::traits::diff_provider::DiffProvider;

use crate::common::{policy, verdict, MockReviewer};

fn gate_with(reviewer: MockReviewer) -> Gate {
    Gate::new(PolicyScanner::new(policy().rule_set), Some(Arc::new(reviewer)), 7)
}

fn reviewer_returning(result: Verdict) -> MockReviewer {
    let mut reviewer = MockReviewer::new();
    reviewer
        .expect_analyze()
        .times(1)
        .returning(move |_| result.clone());
    reviewer
}

fn idle_reviewer() -> MockReviewer {
    let mut reviewer = MockReviewer::new();
    reviewer.expect_analyze().never();
    reviewer
}

#[tokio::test]
async fn violation_blocks_without_calling_the_reviewer() {
    let gate = gate_with(idle_reviewer());
    let diff = "+++ b/config.py\n+password = \"hunter2\"\n".to_string();

    let outcome = gate.evaluate(Resolution::Ready(diff)).await;

    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(outcome.violations().len(), 1);
    assert_eq!(outcome.violations()[0].rule_name, "hardcoded-password");
}

#[tokio::test]
async fn empty_diff_is_no_changes() {
    let gate = gate_with(idle_reviewer());

    let outcome = gate.evaluate(Resolution::Ready(String::new())).await;

    assert_eq!(outcome, GateOutcome::NoChanges);
    assert_eq!(outcome.exit_code(), 0);
    assert!(outcome.violations().is_empty());
}

#[tokio::test]
async fn whitespace_only_diff_is_no_changes() {
    let gate = gate_with(idle_reviewer());
    let outcome = gate.evaluate(Resolution::Ready("\n  \n".to_string())).await;
    assert_eq!(outcome, GateOutcome::NoChanges);
}

#[tokio::test]
async fn non_pull_request_event_is_a_neutral_skip() {
    let gate = gate_with(idle_reviewer());

    let outcome = gate
        .evaluate(Resolution::Skip("CI event is not a pull request".to_string()))
        .await;

    assert!(matches!(outcome, GateOutcome::Skipped { .. }));
    assert_eq!(outcome.exit_code(), 0);
}

#[tokio::test]
async fn low_risk_approval_passes() {
    let gate = gate_with(reviewer_returning(verdict(Decision::Approve, 2)));

    let outcome = gate.evaluate(Resolution::Ready("+fn main() {}\n".to_string())).await;

    assert_eq!(outcome.exit_code(), 0);
    assert!(matches!(outcome, GateOutcome::Approved { verdict: Some(_) }));
}

#[tokio::test]
async fn approval_at_threshold_still_blocks() {
    let gate = gate_with(reviewer_returning(verdict(Decision::Approve, 7)));

    let outcome = gate.evaluate(Resolution::Ready("+fn main() {}\n".to_string())).await;

    assert!(matches!(outcome, GateOutcome::Blocked(BlockReason::Verdict(_))));
    assert_eq!(outcome.exit_code(), 1);
}

#[tokio::test]
async fn block_decision_blocks_regardless_of_score() {
    let gate = gate_with(reviewer_returning(verdict(Decision::Block, 1)));
    let outcome = gate.evaluate(Resolution::Ready("+os.system(cmd)\n".to_string())).await;
    assert!(outcome.is_blocked());
}

#[tokio::test]
async fn fail_closed_verdict_blocks() {
    let gate = gate_with(reviewer_returning(Verdict::fail_closed("Internal Engine Error: timeout")));

    let outcome = gate.evaluate(Resolution::Ready("+print('hi')\n".to_string())).await;

    match outcome {
        GateOutcome::Blocked(BlockReason::Verdict(verdict)) => {
            assert_eq!(verdict.decision, Decision::Block);
            assert_eq!(verdict.risk_score, 10);
        }
        other => panic!("expected AI block, got {:?}", other),
    }
}

#[tokio::test]
async fn reviewer_receives_the_raw_diff() {
    let mut reviewer = MockReviewer::new();
    reviewer
        .expect_analyze()
        .withf(|diff_text| diff_text.starts_with("diff --git"))
        .times(1)
        .returning(|_| verdict(Decision::Approve, 0));
    let gate = gate_with(reviewer);

    let diff = "diff --git a/x b/x\n+++ b/x\n+let x = 1;\n".to_string();
    assert_eq!(gate.evaluate(Resolution::Ready(diff)).await.exit_code(), 0);
}

#[tokio::test]
async fn missing_credential_approves_after_clean_scan() {
    let gate = Gate::new(PolicyScanner::new(policy().rule_set), None, 7);

    let outcome = gate.evaluate(Resolution::Ready("+fn main() {}\n".to_string())).await;

    assert_eq!(outcome, GateOutcome::Approved { verdict: None });
}

#[tokio::test]
async fn missing_credential_does_not_disable_the_scan() {
    let gate = Gate::new(PolicyScanner::new(policy().rule_set), None, 7);
    let outcome = gate.evaluate(Resolution::Ready("+AKIA1234567890ABCD12\n".to_string())).await;
    assert!(outcome.is_blocked());
}

/// Records which diff call the loader made.
struct FakeDiff {
    files: Resolution<Vec<String>>,
    requested: RefCell<Option<Vec<String>>>,
}

impl FakeDiff {
    fn new(files: &[&str]) -> Self {
        Self {
            files: Resolution::Ready(files.iter().map(|f| f.to_string()).collect()),
            requested: RefCell::new(None),
        }
    }
}

impl DiffProvider for FakeDiff {
    fn full_diff(&self) -> Result<Resolution<String>, GitError> {
        Ok(Resolution::Ready("full".to_string()))
    }

    fn changed_files(&self) -> Result<Resolution<Vec<String>>, GitError> {
        Ok(self.files.clone())
    }

    fn diff_for_files(&self, files: &[String]) -> Result<Resolution<String>, GitError> {
        *self.requested.borrow_mut() = Some(files.to_vec());
        Ok(Resolution::Ready("filtered".to_string()))
    }
}

#[test]
fn loader_uses_full_diff_when_nothing_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let filter = IgnoreFilter::load(dir.path(), ".opsguardignore");
    let provider = FakeDiff::new(&["src/main.rs", "src/lib.rs"]);

    let diff = load_diff(&provider, &filter).unwrap();

    assert_eq!(diff, Resolution::Ready("full".to_string()));
    assert!(provider.requested.borrow().is_none());
}

#[test]
fn loader_restricts_diff_to_kept_files() {
    let dir = tempfile::tempdir().unwrap();
    let filter = IgnoreFilter::load(dir.path(), ".opsguardignore");
    let provider = FakeDiff::new(&["Cargo.lock", "src/main.rs"]);

    let diff = load_diff(&provider, &filter).unwrap();

    assert_eq!(diff, Resolution::Ready("filtered".to_string()));
    assert_eq!(*provider.requested.borrow(), Some(vec!["src/main.rs".to_string()]));
}

#[test]
fn loader_passes_skip_through() {
    let dir = tempfile::tempdir().unwrap();
    let filter = IgnoreFilter::load(dir.path(), ".opsguardignore");
    let provider = FakeDiff {
        files: Resolution::Skip("push event".to_string()),
        requested: RefCell::new(None),
    };

    assert_eq!(load_diff(&provider, &filter).unwrap(), Resolution::Skip("push event".to_string()));
}
