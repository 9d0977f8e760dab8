use async_trait::async_trait;
use crate::structs::verdict::Verdict;
use crate::traits::verdict_provider::VerdictProvider;

/// Stands in when a credential exists but the client could not be built.
/// Every review fails closed.
pub struct UnavailableProvider {
    reason: String,
}

impl UnavailableProvider {
    pub fn new(reason: String) -> Self {
        Self { reason }
    }
}

#[async_trait]
impl VerdictProvider for UnavailableProvider {
    async fn analyze(&self, _diff_text: &str) -> Verdict {
        log::error!("❌ AI engine unavailable, failing closed: {}", self.reason);
        Verdict::fail_closed(&format!("Internal Engine Error: {}", self.reason))
    }
}
