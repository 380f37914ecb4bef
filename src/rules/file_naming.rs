//! File naming checks: lowercase, hyphen-separated basenames.

use std::path::Path;

use super::{Rule, is_all_lowercase};
use crate::exemptions::ExemptionRegistry;
use crate::session::LintSession;

pub struct FileNamingRule {
    exemptions: ExemptionRegistry,
}

impl FileNamingRule {
    #[must_use]
    pub const fn new(exemptions: ExemptionRegistry) -> Self {
        Self { exemptions }
    }
}

impl Rule for FileNamingRule {
    fn name(&self) -> &'static str {
        "file-naming"
    }

    fn check(&self, path: &Path, session: &mut LintSession) {
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            return;
        };

        if self.exemptions.is_exempt_filename(filename) {
            return;
        }

        // The case check covers the whole name including the extension.
        if !is_all_lowercase(filename) {
            session.record_error(format!(
                "File name should be lowercase: {}",
                path.display()
            ));
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(filename);

        if stem.contains(' ') {
            session.record_error(format!(
                "File name contains spaces, use hyphens instead: {}",
                path.display()
            ));
        }

        // Dotfiles and exempted patterns (decision records etc.) may keep
        // their underscores; everything else gets flagged.
        if stem.contains('_')
            && !filename.starts_with('.')
            && !self.exemptions.is_exempt_from_underscore_rule(filename)
        {
            session.record_error(format!(
                "File name contains underscores, use hyphens instead: {}",
                path.display()
            ));
        }
    }
}

#[cfg(test)]
#[path = "file_naming_tests.rs"]
mod tests;
