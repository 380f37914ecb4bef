//! Markdown structure: heading-level progression and list-marker style.

use std::path::Path;

use super::Rule;
use super::content::{is_fence_marker, read_text_or_warn};
use crate::session::LintSession;

pub struct StructureRule;

impl StructureRule {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StructureRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for StructureRule {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn check(&self, path: &Path, session: &mut LintSession) {
        let Some(content) = read_text_or_warn(path, session) else {
            return;
        };

        let mut in_code_block = false;
        let mut previous_level: Option<usize> = None;

        for (idx, line) in content.lines().enumerate() {
            let line_number = idx + 1;

            if is_fence_marker(line) {
                in_code_block = !in_code_block;
                continue;
            }
            if in_code_block {
                continue;
            }

            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                let level = trimmed.chars().take_while(|&c| c == '#').count();

                match previous_level {
                    None => {
                        if level != 1 {
                            session.record_warning(format!(
                                "Document should start with a level 1 heading (# Title): {}:{line_number}",
                                path.display()
                            ));
                        }
                    }
                    Some(previous) => {
                        if level > previous + 1 && !numbered_subsection_jump(previous, level, line)
                        {
                            session.record_error(format!(
                                "Heading level skipped (from {previous} to {level}): {}:{line_number}",
                                path.display()
                            ));
                        }
                    }
                }

                previous_level = Some(level);
            }

            if is_asterisk_list_item(line) {
                session.record_warning(format!(
                    "Use - for list items instead of *: {}:{line_number}",
                    path.display()
                ));
            }
        }
    }
}

/// The one tolerated heading jump: level 1 straight to level 3 when the
/// heading line contains a `.`, accommodating numbered subsections like
/// `### 3.1 Detail` directly under `# Title`.
fn numbered_subsection_jump(previous: usize, level: usize, line: &str) -> bool {
    level == 3 && previous == 1 && line.contains('.')
}

/// Matches "optional leading whitespace, `*`, then whitespace" — an
/// asterisk-style list item. Emphasis markers like `**bold**` do not match.
fn is_asterisk_list_item(line: &str) -> bool {
    line.trim_start()
        .strip_prefix('*')
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
