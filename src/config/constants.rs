use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "opsguard.yml";
pub const DEFAULT_REPO_PATH: &str = ".";
pub const DEFAULT_IGNORE_FILE: &str = ".opsguardignore";

pub const DEFAULT_RISK_THRESHOLD: u8 = 7;
pub const DEFAULT_MAX_DIFF_CHARS: usize = 30_000;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";
pub const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;

pub const HTTP_REFERER: &str = "https://opsguard.local";
pub const HTTP_TITLE: &str = "OpsGuard";

pub const GITHUB_ACTIONS_ENV: &str = "GITHUB_ACTIONS";
pub const GITHUB_EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

/// Always excluded from the changed-file list, before any ignore file is read.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git/",
    "*.lock",
    "package-lock.json",
    "pnpm-lock.yaml",
    "go.sum",
];

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn spinner_interval() -> Duration {
    Duration::from_millis(150)
}
