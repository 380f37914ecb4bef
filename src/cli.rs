use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "doc-guard")]
#[command(author, version, about = "Documentation style guard - lint docs trees for CI")]
#[command(long_about = "Lints a documentation tree against naming and Markdown style conventions.\n\n\
    Exit codes:\n  \
    0 - All checks passed (or warnings only, without --strict)\n  \
    1 - Style errors found, or any finding in strict mode\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Root directory of the documentation tree
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Lint a single file instead of the whole tree
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,

    /// File extensions to lint (comma-separated, e.g., md,mdx)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules during discovery
    #[arg(long)]
    pub gitignore: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Suppress the report when the tree is clean
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
