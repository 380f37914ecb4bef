mod code_blocks;
mod content;
mod dir_naming;
mod file_naming;
mod references;
mod structure;

pub use code_blocks::CodeBlockRule;
pub use content::read_text;
pub use dir_naming::DirNamingRule;
pub use file_naming::FileNamingRule;
pub use references::ReferenceRule;
pub use structure::StructureRule;

use std::path::Path;

use crate::session::LintSession;

/// A single style check, stateless across files.
///
/// Rules never short-circuit each other: every rule runs for every file,
/// regardless of what earlier rules recorded. A rule that cannot read its
/// input records a warning and returns; it never aborts the run.
pub trait Rule {
    /// Short identifier for the rule.
    fn name(&self) -> &'static str;

    /// Run the check for one file, appending diagnostics to the session.
    fn check(&self, path: &Path, session: &mut LintSession);
}

/// True when the string contains at least one lowercase letter and no
/// uppercase letters. Digit-only names fail this test, which is why year
/// directories need an exemption entry.
pub(crate) fn is_all_lowercase(s: &str) -> bool {
    s.chars().any(char::is_lowercase) && !s.chars().any(char::is_uppercase)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
