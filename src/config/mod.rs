//! Configuration module for arctree
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (ARCTREE_*)
//! 3. User config (`<config_dir>/arctree/config.toml`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{ArchiverConfig, BrowserConfig, ColorMode, Config, CreateConfig, OutputConfig};
