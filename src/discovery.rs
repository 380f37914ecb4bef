//! Candidate file discovery under the lint root.
//!
//! Discovery walks the tree recursively and keeps files whose extension is
//! on the configured allow-list and that no exclude glob matches. Hidden
//! files and directories (leading `.`) are never descended into or
//! collected; dot-trees like `.git` and `.github` are not documentation.
//! `--file` bypasses discovery entirely, so a hidden file can still be
//! linted by naming it explicitly.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use walkdir::WalkDir;

use crate::config::DiscoveryConfig;
use crate::error::{DocGuardError, Result};

/// Recursive file finder for a documentation tree.
///
/// Built once per run from [`DiscoveryConfig`]; all state is immutable
/// after construction.
#[derive(Debug)]
pub struct DocDiscovery {
    extensions: Vec<String>,
    excludes: GlobSet,
    respect_gitignore: bool,
}

impl DocDiscovery {
    /// Compile the exclude globs and capture the discovery settings.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is not a valid glob.
    pub fn from_config(config: &DiscoveryConfig) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude {
            let glob = Glob::new(pattern).map_err(|e| DocGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let excludes = builder.build().map_err(|e| DocGuardError::InvalidPattern {
            pattern: "<exclude set>".to_string(),
            source: e,
        })?;

        Ok(Self {
            extensions: config.extensions.clone(),
            excludes,
            respect_gitignore: config.gitignore,
        })
    }

    /// Collect every candidate file under `root`, sorted so report order is
    /// stable across runs. A nonexistent root yields an empty set rather
    /// than an error; linting zero files is a clean pass.
    #[must_use]
    pub fn discover(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = if self.respect_gitignore {
            self.walk_gitignore(root)
        } else {
            self.walk_plain(root)
        };
        files.sort();
        files
    }

    /// True when `path` carries an allowed extension and matches no exclude
    /// glob. An empty extension list admits every file.
    #[must_use]
    pub fn is_candidate(&self, path: &Path) -> bool {
        self.has_allowed_extension(path) && !self.excludes.is_match(path)
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    fn walk_plain(&self, root: &Path) -> Vec<PathBuf> {
        // depth 0 is the root itself, which may legitimately be hidden
        // (tempdirs, `~/.config` trees); the hidden check applies below it.
        WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden_name(entry.file_name()))
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file() && self.is_candidate(entry.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn walk_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(true)
            .parents(false)
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|entry| self.is_candidate(entry.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }
}

fn is_hidden_name(name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
