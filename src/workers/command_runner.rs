use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::gate_outcome::GateOutcome;
use crate::errors::{ErrorHandler, OpsGuardResult};
use crate::logger::gate_report_logger::GateReportLogger;
use crate::services::ai_providers::openrouter::OpenRouterProvider;
use crate::services::ai_providers::unavailable::UnavailableProvider;
use crate::services::gate::{load_diff, Gate};
use crate::services::git_manager::{CiEnvironment, GitManager};
use crate::services::ignore_filter::IgnoreFilter;
use crate::services::policy_scanner::PolicyScanner;
use crate::structs::config::policy_config::PolicyConfig;
use crate::traits::verdict_provider::VerdictProvider;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    /// Run one command and map the result to a process exit code.
    /// Any initialization, config or git error exits 1.
    pub async fn run_command(&mut self, command: Commands) -> i32 {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Scan { path, config } => self.scan_command(&path, &config).await,
            Commands::Init { config } => self.init_command(&config),
            Commands::Validate { config } => self.validate_command(&config),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        match result {
            Ok(code) => code,
            Err(e) => {
                ErrorHandler::handle_error(&e);
                1
            }
        }
    }

    async fn scan_command(&self, path: &str, config_path: &str) -> OpsGuardResult<i32> {
        GateReportLogger::print_banner();

        let policy = ConfigManager::load(config_path)?;
        let api_key = std::env::var(&policy.ai.api_key_env).ok();
        let risk_threshold = policy.gate.risk_threshold;

        let outcome = Self::scan(path, policy, CiEnvironment::from_env(), api_key).await?;
        GateReportLogger::print_outcome(&outcome, risk_threshold);

        Ok(outcome.exit_code())
    }

    /// The full gate for one repository: diff retrieval, ignore filtering,
    /// secret scan, then AI review when a credential is present.
    pub async fn scan(
        path: &str,
        policy: PolicyConfig,
        ci: CiEnvironment,
        api_key: Option<String>,
    ) -> OpsGuardResult<GateOutcome> {
        log::info!("🔍 Scanning repository: {}", path);

        let git = GitManager::new(path, ci)?;
        if git.is_ci() {
            log::info!("🏗️ CI mode: diffing pull request range");
        }

        let filter = IgnoreFilter::load(git.repo_path(), &policy.gate.ignore_file);
        let source = load_diff(&git, &filter)?;

        let provider = Self::build_provider(&policy, api_key);
        let gate = Gate::new(PolicyScanner::new(policy.rule_set), provider, policy.gate.risk_threshold);

        Ok(gate.evaluate(source).await)
    }

    fn build_provider(policy: &PolicyConfig, api_key: Option<String>) -> Option<Arc<dyn VerdictProvider>> {
        let api_key = api_key.filter(|key| !key.trim().is_empty());

        let Some(api_key) = api_key else {
            log::warn!(
                "⚠️ {} is not set; only deterministic checks will run",
                policy.ai.api_key_env
            );
            return None;
        };

        match OpenRouterProvider::new(&api_key, &policy.ai, policy.gate.max_diff_chars) {
            Ok(provider) => Some(Arc::new(provider)),
            Err(e) => Some(Arc::new(UnavailableProvider::new(e.to_string()))),
        }
    }

    fn init_command(&self, config_path: &str) -> OpsGuardResult<i32> {
        log::info!("🚀 Initializing OpsGuard policy...");

        ConfigManager::create_sample_config(config_path)?;
        log::info!("📝 Edit {} to tune the blocklist for your repository.", config_path);
        log::info!("🔧 Run 'opsguard validate' to check your policy.");

        Ok(0)
    }

    fn validate_command(&self, config_path: &str) -> OpsGuardResult<i32> {
        log::info!("🔍 Validating OpsGuard policy...");

        let policy = ConfigManager::load(config_path)?;
        log::info!("✅ Policy is valid");

        GateReportLogger::print_rule_set(&policy.rule_set);
        println!("\n⚙️  Gate settings:");
        println!("   Risk threshold: {}", policy.gate.risk_threshold);
        println!("   AI payload ceiling: {} chars", policy.gate.max_diff_chars);
        println!("   Ignore file: {}", policy.gate.ignore_file);
        println!("   AI: {} via {} (timeout {}s)", policy.ai.model, policy.ai.base_url, policy.ai.timeout_secs);

        if std::env::var(&policy.ai.api_key_env).is_err() {
            log::warn!("⚠️ {} is not set; AI review would be skipped", policy.ai.api_key_env);
        }

        log::info!(
            "💡 Ignore patterns are read from {} at the root of the scanned repository",
            policy.gate.ignore_file
        );

        Ok(0)
    }
}
