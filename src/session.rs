//! Run-scoped accumulator for lint diagnostics.
//!
//! A [`LintSession`] is created once per run, threaded mutably through every
//! rule invocation, and read by the reporter at the end. Diagnostics are
//! append-only: once recorded they are never removed, reordered, or
//! deduplicated, so the final report is a pure fold over the run.

use std::path::{Path, PathBuf};

/// Accumulated state for a single lint run.
#[derive(Debug, Clone)]
pub struct LintSession {
    root: PathBuf,
    errors: Vec<String>,
    warnings: Vec<String>,
    files_checked: usize,
    rules_checked: usize,
}

impl LintSession {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
            files_checked: 0,
            rules_checked: 0,
        }
    }

    /// Root directory used for relative-path computation in diagnostics.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Record a hard-fail diagnostic (gates CI by default).
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Record an advisory diagnostic (fatal only in strict mode).
    pub fn record_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub const fn increment_files_checked(&mut self) {
        self.files_checked += 1;
    }

    pub const fn increment_rules_checked(&mut self) {
        self.rules_checked += 1;
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub const fn files_checked(&self) -> usize {
        self.files_checked
    }

    #[must_use]
    pub const fn rules_checked(&self) -> usize {
        self.rules_checked
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// True when no diagnostic of either class was recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
