mod text;

pub use text::{ColorMode, TextReporter};

use crate::session::LintSession;

/// Trait for rendering an accumulated session into report text.
pub trait Reporter {
    /// Render the final report.
    fn render(&self, session: &LintSession) -> String;
}
