//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArctreeResult;

use super::loader::{self, ConfigWarning};

/// Tree prompt behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Lines shown at once by tree prompts
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Match descendants at any depth, regardless of expand state
    #[serde(default = "default_true")]
    pub recursive_search: bool,

    /// Wrap Up/Down at the ends of the list
    #[serde(rename = "loop", default = "default_true")]
    pub loop_navigation: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            recursive_search: true,
            loop_navigation: true,
        }
    }
}

fn default_page_size() -> usize {
    15
}

fn default_true() -> bool {
    true
}

/// What happens after a new archive is created
///
/// With neither flag set the user is asked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateConfig {
    #[serde(default)]
    pub skip_to_new_archive: bool,

    #[serde(default)]
    pub back_to_menu: bool,
}

/// External archive program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiverConfig {
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for ArchiverConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

fn default_program() -> String {
    "7z".to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub create: CreateConfig,

    #[serde(default)]
    pub archiver: ArchiverConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ArctreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ArctreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the user config (or defaults) with env overrides applied
    pub fn load_or_default() -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default()
    }

    /// Apply environment variable overrides (ARCTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
