//! Directory naming checks applied to every path segment between the lint
//! root and the file.

use std::path::{Component, Path};

use super::{Rule, is_all_lowercase};
use crate::exemptions::ExemptionRegistry;
use crate::session::LintSession;

pub struct DirNamingRule {
    exemptions: ExemptionRegistry,
    collections: Vec<String>,
}

impl DirNamingRule {
    #[must_use]
    pub const fn new(exemptions: ExemptionRegistry, collections: Vec<String>) -> Self {
        Self {
            exemptions,
            collections,
        }
    }

    fn check_segment(&self, segment: &str, dir_display: &str, session: &mut LintSession) {
        if !is_all_lowercase(segment) {
            session.record_error(format!(
                "Directory name should be lowercase: {segment} in {dir_display}"
            ));
        }

        if segment.contains(' ') {
            session.record_error(format!(
                "Directory name contains spaces, use hyphens instead: {segment} in {dir_display}"
            ));
        }

        if segment.contains('_') && !segment.starts_with('.') {
            session.record_error(format!(
                "Directory name contains underscores, use hyphens instead: {segment} in {dir_display}"
            ));
        }

        for collection in &self.collections {
            if segment == singular_form(collection) {
                session.record_warning(format!(
                    "Collection directory should use plural form: {segment} should be {collection} in {dir_display}"
                ));
            }
        }
    }
}

impl Rule for DirNamingRule {
    fn name(&self) -> &'static str {
        "directory-naming"
    }

    fn check(&self, path: &Path, session: &mut LintSession) {
        let Some(parent) = path.parent() else {
            return;
        };

        // Segments are taken relative to the root; the root itself is never
        // checked. A file outside the root falls back to its own parent
        // components.
        let rel = parent.strip_prefix(session.root()).unwrap_or(parent);
        let dir_display = parent.display().to_string();

        for component in rel.components() {
            let Component::Normal(segment) = component else {
                continue;
            };
            let Some(segment) = segment.to_str() else {
                continue;
            };
            if segment.is_empty() || self.exemptions.is_exempt_dir_segment(segment) {
                continue;
            }
            self.check_segment(segment, &dir_display, session);
        }
    }
}

/// Heuristic singularization: the name with its last character stripped.
/// Not grammatical, but it matches how the collection vocabulary is used.
fn singular_form(name: &str) -> &str {
    let mut chars = name.chars();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
#[path = "dir_naming_tests.rs"]
mod tests;
