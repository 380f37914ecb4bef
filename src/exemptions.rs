//! Exemption lookups consulted by the naming rules.
//!
//! Exemptions are checked *before* a diagnostic is produced, never after; no
//! diagnostic is suppressed post hoc. The registry is immutable once built.

use indexmap::IndexSet;
use regex::Regex;

use crate::error::{DocGuardError, Result};

/// Filenames never subject to naming checks (usually root-level files).
pub const DEFAULT_EXEMPT_FILES: &[&str] = &[
    "README.md",
    "CHANGELOG.md",
    "CLAUDE.md",
    "CLAUDE.zh.md",
    "SOLUTIONS.en.md",
    "SOLUTIONS.zh.md",
];

/// Directory segments never subject to directory naming checks.
/// Year directories are digit-only and would otherwise fail the
/// lowercase check.
pub const DEFAULT_EXEMPT_DIRS: &[&str] = &["2025"];

/// Filename patterns excused from the underscore rule only.
/// Matched as an anchored prefix, not a full-string match.
pub const DEFAULT_UNDERSCORE_PATTERNS: &[&str] = &[
    r"\d{3}_[a-z_]+\.md",
    r"example_[a-z_]+\.md",
    r"agent_collaboration\.md",
    r"documentation_linter\.md",
];

/// Static lookup tables describing which files, directory segments, and
/// filename patterns are excused from specific checks.
#[derive(Debug, Clone)]
pub struct ExemptionRegistry {
    exempt_files: IndexSet<String>,
    exempt_dirs: IndexSet<String>,
    underscore_patterns: Vec<Regex>,
}

impl ExemptionRegistry {
    /// Build a registry from explicit lists, compiling the underscore
    /// exemption patterns.
    ///
    /// # Errors
    /// Returns an error if any underscore pattern is not a valid regex.
    pub fn new(
        exempt_files: impl IntoIterator<Item = String>,
        exempt_dirs: impl IntoIterator<Item = String>,
        underscore_patterns: &[String],
    ) -> Result<Self> {
        let mut compiled = Vec::with_capacity(underscore_patterns.len());
        for pattern in underscore_patterns {
            // Anchor at the start so patterns match as prefixes of the
            // filename, wherever `\d` or alternations appear inside them.
            let anchored = format!("^(?:{pattern})");
            let regex =
                Regex::new(&anchored).map_err(|e| DocGuardError::InvalidExemptPattern {
                    pattern: pattern.clone(),
                    source: e,
                })?;
            compiled.push(regex);
        }

        Ok(Self {
            exempt_files: exempt_files.into_iter().collect(),
            exempt_dirs: exempt_dirs.into_iter().collect(),
            underscore_patterns: compiled,
        })
    }

    /// Registry with the built-in exemption lists.
    ///
    /// # Panics
    /// Panics only if a built-in pattern stops compiling, which a unit test
    /// pins against.
    #[must_use]
    pub fn with_defaults() -> Self {
        let files = DEFAULT_EXEMPT_FILES.iter().map(ToString::to_string);
        let dirs = DEFAULT_EXEMPT_DIRS.iter().map(ToString::to_string);
        let patterns: Vec<String> = DEFAULT_UNDERSCORE_PATTERNS
            .iter()
            .map(ToString::to_string)
            .collect();
        Self::new(files, dirs, &patterns).expect("built-in exemption patterns are valid")
    }

    /// Exact membership test against the exempt filename set.
    #[must_use]
    pub fn is_exempt_filename(&self, name: &str) -> bool {
        self.exempt_files.contains(name)
    }

    /// Exact membership test against the exempt directory-segment set.
    #[must_use]
    pub fn is_exempt_dir_segment(&self, segment: &str) -> bool {
        self.exempt_dirs.contains(segment)
    }

    /// True if the filename matches any underscore exemption pattern.
    /// The match is an anchored prefix match: the pattern must match at the
    /// start of the filename but need not consume all of it.
    #[must_use]
    pub fn is_exempt_from_underscore_rule(&self, filename: &str) -> bool {
        self.underscore_patterns
            .iter()
            .any(|re| re.is_match(filename))
    }
}

impl Default for ExemptionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
#[path = "exemptions_tests.rs"]
mod tests;
