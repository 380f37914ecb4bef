//! Reference formatting: bare directory and file-extension mentions in prose
//! should be wrapped in backticks.
//!
//! The token boundary and URL predicates are deliberately approximate
//! heuristics; unit tests pin their exact edge cases.

use std::path::Path;

use super::Rule;
use super::content::{is_fence_marker, read_text_or_warn};
use crate::session::LintSession;

/// Directory names commonly referenced in prose.
const COMMON_DIRS: &[&str] = &["docs", "src", "tests", ".agent"];

/// Extension tokens that read as file references when standing alone.
const EXTENSION_TOKENS: &[&str] = &[".md", ".py", ".sh", ".js", ".ts"];

/// Preceding-token suffixes that mark a URL context, suppressing the
/// extension warning.
const URL_CONTEXT_SUFFIXES: &[&str] = &["http:", "https:", "www.", "ftp:"];

pub struct ReferenceRule;

impl ReferenceRule {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn check_line(path: &Path, line: &str, line_number: usize, session: &mut LintSession) {
        for dir in COMMON_DIRS {
            let token = format!("{dir}/");
            for _ in unwrapped_token_positions(line, &token) {
                session.record_warning(format!(
                    "Directory reference should use backticks: {token} at {}:{line_number}",
                    path.display()
                ));
            }
        }

        // Extension tokens are reported in position order across the line,
        // not grouped per extension.
        let mut matches: Vec<(usize, &str)> = Vec::new();
        for ext in EXTENSION_TOKENS {
            for start in unwrapped_token_positions(line, ext) {
                matches.push((start, ext));
            }
        }
        matches.sort_unstable_by_key(|&(start, _)| start);

        for (start, ext) in matches {
            if preceding_token_is_url(line, start) {
                continue;
            }
            session.record_warning(format!(
                "File extension reference should use backticks: {ext} at {}:{line_number}",
                path.display()
            ));
        }
    }
}

impl Default for ReferenceRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ReferenceRule {
    fn name(&self) -> &'static str {
        "references"
    }

    fn check(&self, path: &Path, session: &mut LintSession) {
        let Some(content) = read_text_or_warn(path, session) else {
            return;
        };

        let mut in_code_block = false;
        for (idx, line) in content.lines().enumerate() {
            if is_fence_marker(line) {
                in_code_block = !in_code_block;
                continue;
            }
            if in_code_block {
                continue;
            }
            Self::check_line(path, line, idx + 1, session);
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_wrapping_char(c: char) -> bool {
    c == '`' || is_word_char(c)
}

/// Byte offsets where `token` occurs neither preceded nor followed by a
/// backtick or word character (so `docs/` in prose matches, but `` `docs/` ``
/// and `mydocs/` do not).
fn unwrapped_token_positions(line: &str, token: &str) -> Vec<usize> {
    line.match_indices(token)
        .filter(|&(start, _)| {
            let before = line[..start].chars().next_back();
            let after = line[start + token.len()..].chars().next();
            !before.is_some_and(is_wrapping_char) && !after.is_some_and(is_wrapping_char)
        })
        .map(|(start, _)| start)
        .collect()
}

/// True when the last whitespace-delimited token before `start` looks like a
/// URL scheme or `www.` prefix.
fn preceding_token_is_url(line: &str, start: usize) -> bool {
    line[..start]
        .split_whitespace()
        .next_back()
        .is_some_and(|token| URL_CONTEXT_SUFFIXES.iter().any(|s| token.ends_with(s)))
}

#[cfg(test)]
#[path = "references_tests.rs"]
mod tests;
