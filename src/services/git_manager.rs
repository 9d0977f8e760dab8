use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use serde::Deserialize;
use crate::config::constants::{GITHUB_ACTIONS_ENV, GITHUB_EVENT_PATH_ENV};
use crate::enums::resolution::Resolution;
use crate::errors::GitError;
use crate::traits::diff_provider::DiffProvider;

/// The bits of the CI environment that decide how the diff range resolves.
#[derive(Debug, Clone, Default)]
pub struct CiEnvironment {
    pub github_actions: bool,
    pub event_path: Option<PathBuf>,
}

impl CiEnvironment {
    pub fn from_env() -> Self {
        Self {
            github_actions: std::env::var_os(GITHUB_ACTIONS_ENV).is_some(),
            event_path: std::env::var_os(GITHUB_EVENT_PATH_ENV).map(PathBuf::from),
        }
    }

    pub fn local() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffRange {
    /// Uncommitted changes against `HEAD`.
    WorkingTree,
    /// Pull request range from the CI event payload.
    Commits { base: String, head: String },
}

impl DiffRange {
    fn git_args(&self) -> Vec<String> {
        match self {
            DiffRange::WorkingTree => vec!["HEAD".to_string()],
            DiffRange::Commits { base, head } => vec![base.clone(), head.clone()],
        }
    }
}

#[derive(Deserialize)]
struct GithubEvent {
    #[serde(default)]
    pull_request: Option<PullRequest>,
}

#[derive(Deserialize)]
struct PullRequest {
    #[serde(default)]
    base: Option<CommitRef>,
    #[serde(default)]
    head: Option<CommitRef>,
}

#[derive(Deserialize)]
struct CommitRef {
    #[serde(default)]
    sha: Option<String>,
}

pub struct GitManager {
    repo_path: PathBuf,
    ci: CiEnvironment,
}

impl GitManager {
    pub fn new(repo_path: &str, ci: CiEnvironment) -> Result<Self, GitError> {
        let manager = Self {
            repo_path: PathBuf::from(repo_path),
            ci,
        };

        manager
            .run_git(&["rev-parse", "--is-inside-work-tree"])
            .map_err(|e| GitError::InvalidRepository {
                path: repo_path.to_string(),
                reason: e.to_string(),
            })?;

        Ok(manager)
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    pub fn is_ci(&self) -> bool {
        self.ci.github_actions
    }

    pub fn resolve_range(&self) -> Result<Resolution<DiffRange>, GitError> {
        if !self.is_ci() {
            return Ok(Resolution::Ready(DiffRange::WorkingTree));
        }

        let event_path = self
            .ci
            .event_path
            .as_ref()
            .ok_or_else(|| GitError::EventPayload(format!("{} environment variable not set", GITHUB_EVENT_PATH_ENV)))?;

        let raw = fs::read_to_string(event_path).map_err(|e| {
            GitError::EventPayload(format!("GitHub event file not readable: {} ({})", event_path.display(), e))
        })?;

        let event: GithubEvent = serde_json::from_str(&raw)
            .map_err(|e| GitError::EventPayload(format!("Failed to parse GitHub event JSON: {}", e)))?;

        let Some(pull_request) = event.pull_request else {
            return Ok(Resolution::Skip("CI event is not a pull request".to_string()));
        };

        let base = pull_request.base.and_then(|r| r.sha).filter(|sha| !sha.is_empty());
        let head = pull_request.head.and_then(|r| r.sha).filter(|sha| !sha.is_empty());

        match (base, head) {
            (Some(base), Some(head)) => Ok(Resolution::Ready(DiffRange::Commits { base, head })),
            _ => Err(GitError::EventPayload(
                "Missing base.sha or head.sha in pull_request event data".to_string(),
            )),
        }
    }

    pub fn get_diff(&self) -> Result<Resolution<String>, GitError> {
        match self.resolve_range()? {
            Resolution::Ready(range) => self.diff_for_range(&range, &[]).map(Resolution::Ready),
            Resolution::Skip(reason) => Ok(Resolution::Skip(reason)),
        }
    }

    pub fn changed_files(&self) -> Result<Resolution<Vec<String>>, GitError> {
        let range = match self.resolve_range()? {
            Resolution::Ready(range) => range,
            Resolution::Skip(reason) => return Ok(Resolution::Skip(reason)),
        };

        // Unquoted, NUL-separated names so they can be fed back as pathspecs verbatim.
        let mut args: Vec<String> = ["-c", "core.quotepath=off", "diff", "--name-only", "-z"]
            .iter()
            .map(|arg| arg.to_string())
            .collect();
        args.extend(range.git_args());
        let output = self.run_git_owned(&args)?;

        Ok(Resolution::Ready(parse_name_list(&output)))
    }

    pub fn get_diff_for_files(&self, files: &[String]) -> Result<Resolution<String>, GitError> {
        if files.is_empty() {
            return Ok(Resolution::Ready(String::new()));
        }

        match self.resolve_range()? {
            Resolution::Ready(range) => self.diff_for_range(&range, files).map(Resolution::Ready),
            Resolution::Skip(reason) => Ok(Resolution::Skip(reason)),
        }
    }

    fn diff_for_range(&self, range: &DiffRange, files: &[String]) -> Result<String, GitError> {
        let mut args = vec!["diff".to_string()];
        args.extend(range.git_args());
        if !files.is_empty() {
            args.push("--".to_string());
            args.extend(files.iter().map(|file| literal_pathspec(file)));
        }

        self.run_git_owned(&args)
    }

    fn run_git_owned(&self, args: &[String]) -> Result<String, GitError> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run_git(&args)
    }

    fn run_git(&self, args: &[&str]) -> Result<String, GitError> {
        log::debug!("Running git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| GitError::CommandFailed {
                command: args.join(" "),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn parse_name_list(output: &str) -> Vec<String> {
    output
        .split('\0')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn literal_pathspec(file: &str) -> String {
    format!(":(literal){}", file)
}

impl DiffProvider for GitManager {
    fn full_diff(&self) -> Result<Resolution<String>, GitError> {
        self.get_diff()
    }

    fn changed_files(&self) -> Result<Resolution<Vec<String>>, GitError> {
        GitManager::changed_files(self)
    }

    fn diff_for_files(&self, files: &[String]) -> Result<Resolution<String>, GitError> {
        self.get_diff_for_files(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn manager_with_event(event: &str) -> (tempfile::NamedTempFile, GitManager) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(event.as_bytes()).unwrap();

        // Range resolution never touches the repository, so skip `new`.
        let manager = GitManager {
            repo_path: PathBuf::from("."),
            ci: CiEnvironment {
                github_actions: true,
                event_path: Some(file.path().to_path_buf()),
            },
        };
        (file, manager)
    }

    #[test]
    fn local_mode_diffs_against_head() {
        let manager = GitManager {
            repo_path: PathBuf::from("."),
            ci: CiEnvironment::local(),
        };
        assert_eq!(manager.resolve_range().unwrap(), Resolution::Ready(DiffRange::WorkingTree));
    }

    #[test]
    fn pull_request_event_gives_commit_range() {
        let (_file, manager) = manager_with_event(
            r#"{"pull_request": {"base": {"sha": "abc123"}, "head": {"sha": "def456"}}}"#,
        );

        assert_eq!(
            manager.resolve_range().unwrap(),
            Resolution::Ready(DiffRange::Commits {
                base: "abc123".to_string(),
                head: "def456".to_string(),
            })
        );
    }

    #[test]
    fn push_event_is_a_skip() {
        let (_file, manager) = manager_with_event(r#"{"ref": "refs/heads/main", "deleted": false}"#);
        assert!(matches!(manager.resolve_range().unwrap(), Resolution::Skip(_)));
    }

    #[test]
    fn missing_sha_is_an_error() {
        let (_file, manager) = manager_with_event(r#"{"pull_request": {"base": {"sha": "abc123"}, "head": {}}}"#);
        assert!(matches!(manager.resolve_range(), Err(GitError::EventPayload(_))));
    }

    #[test]
    fn malformed_event_is_an_error() {
        let (_file, manager) = manager_with_event("{not json");
        assert!(matches!(manager.resolve_range(), Err(GitError::EventPayload(_))));
    }

    #[test]
    fn name_list_keeps_names_verbatim() {
        let names = parse_name_list("Cargo.lock\0caf\u{e9}.py\0 padded name.py \0");
        assert_eq!(names, vec!["Cargo.lock", "caf\u{e9}.py", " padded name.py "]);
    }

    #[test]
    fn pathspecs_are_literal() {
        assert_eq!(literal_pathspec("src/*.py"), ":(literal)src/*.py");
    }

    #[test]
    fn ci_without_event_path_is_an_error() {
        let manager = GitManager {
            repo_path: PathBuf::from("."),
            ci: CiEnvironment {
                github_actions: true,
                event_path: None,
            },
        };
        assert!(matches!(manager.resolve_range(), Err(GitError::EventPayload(_))));
    }
}
