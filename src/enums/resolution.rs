/// Outcome of asking the VCS collaborator for something that may legitimately
/// not apply to this run, e.g. a CI event that is not a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Ready(T),
    Skip(String),
}
