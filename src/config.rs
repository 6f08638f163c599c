//! Generator configuration.
//!
//! The configuration is an immutable value built once at startup and passed by
//! reference to the asset assembler and writer. It defaults to the brand
//! palette and the `nebula-x-assets/` output directory, and can be overridden
//! from a TOML file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::DEFAULT_OUTPUT_DIR;
use crate::models::Palette;

/// Generator configuration.
///
/// # File Format
///
/// ```toml
/// output_dir = "dist/brand"
///
/// [palette]
/// stellar_gold = "#FBBF24"
/// ```
///
/// Every key is optional; missing keys keep their defaults.
///
/// # Validation
///
/// - `output_dir` must not be empty
/// - palette entries must be `#RRGGBB` hex colors (checked while parsing)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory the assets are written to, created if missing
    pub output_dir: PathBuf,
    /// Colors used by every asset
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// Unlike the default configuration, a missing file is an error: the path
    /// was asked for explicitly.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Returns a copy writing to `output_dir` instead.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            anyhow::bail!("output_dir must not be empty");
        }
        Ok(())
    }
}
