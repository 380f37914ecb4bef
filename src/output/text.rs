use crate::session::LintSession;

use super::Reporter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextReporter {
    use_colors: bool,
}

impl TextReporter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl Reporter for TextReporter {
    fn render(&self, session: &LintSession) -> String {
        if session.is_clean() {
            let message = format!(
                "✅ All {} files passed documentation standards checks.",
                session.files_checked()
            );
            return self.colorize(&message, ansi::GREEN);
        }

        let mut report: Vec<String> = Vec::new();

        if session.has_errors() {
            report.push(format!("\n{}", self.colorize("❌ ERRORS:", ansi::RED)));
            for error in session.errors() {
                report.push(format!("  - {error}"));
            }
        }

        if session.has_warnings() {
            report.push(format!(
                "\n{}",
                self.colorize("⚠️ WARNINGS:", ansi::YELLOW)
            ));
            for warning in session.warnings() {
                report.push(format!("  - {warning}"));
            }
        }

        report.push(format!(
            "\nChecked {} Markdown files.",
            session.files_checked()
        ));
        report.push(format!(
            "Found {} errors and {} warnings.",
            session.errors().len(),
            session.warnings().len()
        ));

        report.join("\n")
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
