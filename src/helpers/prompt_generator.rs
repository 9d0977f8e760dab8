/// User prompt for the AI review plus whether the diff had to be cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPrompt {
    pub content: String,
    pub submitted_chars: usize,
    pub truncated: bool,
}

/// Only the first `max_chars` characters of the diff are submitted. Anything
/// past that ceiling is never seen by the reviewer.
pub fn generate_prompt(diff_text: &str, max_chars: usize) -> ReviewPrompt {
    let (submitted, truncated) = match diff_text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (&diff_text[..byte_index], true),
        None => (diff_text, false),
    };

    ReviewPrompt {
        content: format!("Analyze this git diff:\n\n{}", submitted),
        submitted_chars: submitted.chars().count(),
        truncated,
    }
}
