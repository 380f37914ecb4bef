//! Rule orchestration: builds the rule set from configuration and runs every
//! rule per file in a fixed order.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::rules::{
    CodeBlockRule, DirNamingRule, FileNamingRule, ReferenceRule, Rule, StructureRule,
};
use crate::session::LintSession;

pub struct Linter {
    rules: Vec<Box<dyn Rule>>,
}

impl Linter {
    /// Build a linter from configuration.
    ///
    /// Rule order is fixed (file naming, directory naming, references, code
    /// blocks, structure) and determines diagnostic order within one file.
    ///
    /// # Errors
    /// Returns an error if the exemption patterns do not compile.
    pub fn from_config(config: &Config) -> Result<Self> {
        let exemptions = config.exemption_registry()?;
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(FileNamingRule::new(exemptions.clone())),
            Box::new(DirNamingRule::new(
                exemptions,
                config.vocabulary.collections.clone(),
            )),
            Box::new(ReferenceRule::new()),
            Box::new(CodeBlockRule::new()),
            Box::new(StructureRule::new()),
        ];
        Ok(Self { rules })
    }

    /// Run every rule on one file. Diagnostics land in the session; rules
    /// never short-circuit each other.
    pub fn lint_file(&self, session: &mut LintSession, path: &Path) {
        session.increment_files_checked();
        for rule in &self.rules {
            rule.check(path, session);
            session.increment_rules_checked();
        }
    }

    /// Lint every file in order.
    pub fn lint_all(&self, session: &mut LintSession, files: &[PathBuf]) {
        for path in files {
            self.lint_file(session, path);
        }
    }
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
