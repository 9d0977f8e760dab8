use std::fs;
use std::path::Path;
use std::process::Command;
use async_trait::async_trait;
use mockall::mock;
use serde_json::json;
use tempfile::TempDir;

use opsguard::config::config_manager::{ConfigFormat, ConfigManager};
use opsguard::enums::decision::Decision;
use opsguard::structs::config::policy_config::PolicyConfig;
use opsguard::structs::verdict::Verdict;
use opsguard::traits::verdict_provider::VerdictProvider;

mock! {
    pub Reviewer {}

    #[async_trait]
    impl VerdictProvider for Reviewer {
        async fn analyze(&self, diff_text: &str) -> Verdict;
    }
}

pub const POLICY_YAML: &str = r#"
blocklist:
  - name: aws-access-key
    pattern: 'AKIA[0-9A-Z]{16}'
  - name: hardcoded-password
    pattern: '(?i)password\s*=\s*"[^"]+"'
"#;

pub fn policy() -> PolicyConfig {
    ConfigManager::parse(POLICY_YAML, ConfigFormat::Yaml).unwrap()
}

pub fn verdict(decision: Decision, risk_score: u8) -> Verdict {
    Verdict {
        decision,
        risk_score,
        summary: "reviewed".to_string(),
        findings: Vec::new(),
    }
}

/// Chat-completions response whose single message carries `content`.
pub fn chat_body(content: &str) -> serde_json::Value {
    json!({
        "id": "gen-1",
        "model": "test/model",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

/// Throwaway git repository with one committed file per entry in `files`.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let repo = Self {
            dir: tempfile::tempdir().unwrap(),
        };

        repo.git(&["init", "-q"]);
        for (name, content) in files {
            repo.write(name, content);
        }
        repo.git(&["add", "-A"]);
        repo.git(&[
            "-c",
            "user.email=ci@example.com",
            "-c",
            "user.name=CI",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "-q",
            "-m",
            "initial",
        ]);

        repo
    }

    pub fn path(&self) -> &str {
        self.dir.path().to_str().unwrap()
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .unwrap();
        assert!(
            status.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&status.stderr)
        );
    }
}
