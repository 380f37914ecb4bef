//! Optional `.doc-guard.toml` configuration.
//!
//! Every table is optional; a missing file (or `--no-config`) yields the
//! built-in defaults, which match the conventions the tool was written for.
//! Unknown keys are rejected so typos fail loudly instead of silently
//! reverting to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DocGuardError, Result};
use crate::exemptions::{
    DEFAULT_EXEMPT_DIRS, DEFAULT_EXEMPT_FILES, DEFAULT_UNDERSCORE_PATTERNS, ExemptionRegistry,
};

/// Config file name looked up in the lint root.
pub const LOCAL_CONFIG_NAME: &str = ".doc-guard.toml";

/// Plural directory names expected to hold collections of like items.
pub const DEFAULT_COLLECTION_DIRS: &[&str] =
    &["docs", "specs", "guides", "decisions", "debts", "metrics"];

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

fn default_exempt_files() -> Vec<String> {
    DEFAULT_EXEMPT_FILES.iter().map(ToString::to_string).collect()
}

fn default_exempt_dirs() -> Vec<String> {
    DEFAULT_EXEMPT_DIRS.iter().map(ToString::to_string).collect()
}

fn default_underscore_patterns() -> Vec<String> {
    DEFAULT_UNDERSCORE_PATTERNS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_collections() -> Vec<String> {
    DEFAULT_COLLECTION_DIRS
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// File extensions to lint.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns excluded from discovery.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect `.gitignore` rules during traversal (default: false).
    #[serde(default)]
    pub gitignore: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
            gitignore: false,
        }
    }
}

/// Overrides for the built-in exemption lists. A list given here *replaces*
/// the corresponding default list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExemptionsConfig {
    /// Exact filenames excused from all naming checks.
    #[serde(default = "default_exempt_files")]
    pub files: Vec<String>,

    /// Exact directory segments excused from directory naming checks.
    #[serde(default = "default_exempt_dirs")]
    pub dirs: Vec<String>,

    /// Regex patterns (anchored prefix match) excusing filenames from the
    /// underscore rule only.
    #[serde(default = "default_underscore_patterns")]
    pub underscore_patterns: Vec<String>,
}

impl Default for ExemptionsConfig {
    fn default() -> Self {
        Self {
            files: default_exempt_files(),
            dirs: default_exempt_dirs(),
            underscore_patterns: default_underscore_patterns(),
        }
    }
}

/// Naming vocabulary consulted by the directory naming rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VocabularyConfig {
    /// Collection directory names (plural); the singular form of any entry
    /// triggers a pluralization warning.
    #[serde(default = "default_collections")]
    pub collections: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            collections: default_collections(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Treat warnings as failures (same as `--strict`).
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub exemptions: ExemptionsConfig,

    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

impl Config {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    /// Returns an error on invalid TOML or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Compile the exemption lists into a registry.
    ///
    /// # Errors
    /// Returns an error if any underscore pattern is not a valid regex.
    pub fn exemption_registry(&self) -> Result<ExemptionRegistry> {
        ExemptionRegistry::new(
            self.exemptions.files.iter().cloned(),
            self.exemptions.dirs.iter().cloned(),
            &self.exemptions.underscore_patterns,
        )
    }
}

/// Load configuration for a run.
///
/// An explicit `--config` path must exist; otherwise `<root>/.doc-guard.toml`
/// is used when present, and defaults apply when it is not.
///
/// # Errors
/// Returns an error if an explicit path is missing, or if any config file
/// cannot be read or parsed.
pub fn load_config(root: &Path, explicit: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(DocGuardError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let local = root.join(LOCAL_CONFIG_NAME);
            if !local.exists() {
                return Ok(Config::default());
            }
            local
        }
    };

    let text = std::fs::read_to_string(&path).map_err(|e| DocGuardError::FileRead {
        path: path.clone(),
        source: e,
    })?;
    Config::from_toml(&text)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
