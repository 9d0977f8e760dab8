use std::path::Path;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use crate::config::constants::DEFAULT_IGNORE_PATTERNS;

/// Path predicate built from the default exclusions plus an optional
/// gitignore-style file at the repository root.
///
/// Applied to the changed-file list before the diff is fetched, never to
/// diff content.
pub struct IgnoreFilter {
    matcher: Gitignore,
}

impl IgnoreFilter {
    pub fn load(root: &Path, ignore_file: &str) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_PATTERNS {
            if let Err(e) = builder.add_line(None, pattern) {
                log::warn!("Skipping built-in ignore pattern '{}': {}", pattern, e);
            }
        }

        let ignore_path = root.join(ignore_file);
        if ignore_path.is_file() {
            log::info!("📄 Using ignore patterns from {}", ignore_path.display());
            if let Some(e) = builder.add(&ignore_path) {
                log::warn!("Some patterns in {} were not loaded: {}", ignore_path.display(), e);
            }
        }

        let matcher = builder.build().unwrap_or_else(|e| {
            log::warn!("Ignore patterns could not be compiled, using none: {}", e);
            Gitignore::empty()
        });

        Self { matcher }
    }

    /// `path` is relative to the repository root, as `git diff --name-only` prints it.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.matcher
            .matched_path_or_any_parents(Path::new(path), false)
            .is_ignore()
    }

    pub fn filter(&self, files: Vec<String>) -> Vec<String> {
        let total = files.len();
        let kept: Vec<String> = files.into_iter().filter(|f| !self.is_ignored(f)).collect();

        if kept.len() < total {
            log::info!("🙈 Ignored {} of {} changed files", total - kept.len(), total);
        }

        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lock_files_and_git_metadata_are_ignored_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let filter = IgnoreFilter::load(dir.path(), ".opsguardignore");

        assert!(filter.is_ignored("Cargo.lock"));
        assert!(filter.is_ignored("frontend/package-lock.json"));
        assert!(filter.is_ignored(".git/config"));
        assert!(!filter.is_ignored("src/main.rs"));
    }

    #[test]
    fn ignore_file_patterns_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".opsguardignore"), "# fixtures\ntests/fixtures/\n*.md\n").unwrap();
        let filter = IgnoreFilter::load(dir.path(), ".opsguardignore");

        let kept = filter.filter(vec![
            "README.md".to_string(),
            "tests/fixtures/leak.py".to_string(),
            "src/app.py".to_string(),
        ]);

        assert_eq!(kept, vec!["src/app.py".to_string()]);
    }

    #[test]
    fn missing_ignore_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let filter = IgnoreFilter::load(dir.path(), "does-not-exist");
        assert!(!filter.is_ignored("src/lib.rs"));
    }
}
