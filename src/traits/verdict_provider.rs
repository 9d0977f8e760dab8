use async_trait::async_trait;
use crate::structs::verdict::Verdict;

/// Semantic review of a diff.
///
/// Infallible by contract: implementations resolve every transport, timeout
/// or parse failure to `Verdict::fail_closed`, so the gate always reaches a
/// decision and an outage can never approve a change.
#[async_trait]
pub trait VerdictProvider: Send + Sync {
    async fn analyze(&self, diff_text: &str) -> Verdict;
}
