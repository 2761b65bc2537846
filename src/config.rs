//! Optional setup.toml configuration.
//!
//! Every field defaults to the stock bootstrap behavior, so a missing
//! config file is not an error. The file exists for forks that rename
//! the analyzer, swap the demangler, or pin its version.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure matching setup.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    pub tool: ToolSection,
    pub toolchain: ToolchainSection,
    pub demangler: DemanglerSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ToolSection {
    /// Name of the analyzer being built, used in status messages.
    pub name: String,
    /// Documentation file referenced by the completion message.
    pub docs: String,
}

impl Default for ToolSection {
    fn default() -> Self {
        Self {
            name: "trawl".to_string(),
            docs: "README.md".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ToolchainSection {
    /// Minimum cargo version requirement, e.g. ">=1.70.0".
    /// When unset, presence alone passes.
    pub min_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemanglerSection {
    /// Executable name probed for on the search path.
    pub bin: String,
    /// Registry package installed when the executable is missing.
    pub package: String,
    /// Version pin passed to the install command. Unset means
    /// "latest available", matching repeated-run behavior of the
    /// original bootstrap.
    pub version: Option<String>,
}

impl Default for DemanglerSection {
    fn default() -> Self {
        Self {
            bin: "rustfilt".to_string(),
            package: "rustfilt".to_string(),
            version: None,
        }
    }
}

impl SetupConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load config when the file exists, otherwise fall back to the
    /// stock defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
