use crate::enums::resolution::Resolution;
use crate::errors::GitError;

/// Source of the change set under review.
///
/// Implementations signal "nothing to review for this event" with
/// `Resolution::Skip` rather than an error.
pub trait DiffProvider {
    fn full_diff(&self) -> Result<Resolution<String>, GitError>;

    fn changed_files(&self) -> Result<Resolution<Vec<String>>, GitError>;

    fn diff_for_files(&self, files: &[String]) -> Result<Resolution<String>, GitError>;
}
