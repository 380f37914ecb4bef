//! Fenced code blocks must carry a language tag.

use std::path::Path;

use super::Rule;
use super::content::{FENCE_MARKER, read_text_or_warn};
use crate::session::LintSession;

pub struct CodeBlockRule;

impl CodeBlockRule {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CodeBlockRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for CodeBlockRule {
    fn name(&self) -> &'static str {
        "code-blocks"
    }

    fn check(&self, path: &Path, session: &mut LintSession) {
        let Some(content) = read_text_or_warn(path, session) else {
            return;
        };

        let mut in_code_block = false;
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if !trimmed.starts_with(FENCE_MARKER) {
                continue;
            }

            // Only opening fences are checked; the closing fence carries no
            // language tag by definition.
            if !in_code_block && !has_language_token(trimmed) {
                session.record_error(format!(
                    "Code block doesn't specify a language, use ```plaintext for text: {}:{}",
                    path.display(),
                    idx + 1
                ));
            }
            in_code_block = !in_code_block;
        }
    }
}

/// True when the trimmed fence line continues with a word-character language
/// token (```rust, ```plaintext). An info string that opens with anything
/// else, e.g. ```{.rust}, does not count.
fn has_language_token(trimmed: &str) -> bool {
    trimmed
        .strip_prefix(FENCE_MARKER)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "code_blocks_tests.rs"]
mod tests;
