//! Configuration loading and discovery for `pxshift.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::PxsConfig;
use crate::transforms::ShiftKind;
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file searched for
pub const CONFIG_FILE: &str = "pxshift.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pxshift.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the active variant
    pub active: Option<ShiftKind>,
}

/// Per-user config directory: `$XDG_CONFIG_HOME/pixelshift`, else `~/.config/pixelshift`.
pub fn user_config_dir() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|base| base.join("pixelshift"))
}

/// Search for pxshift.toml starting at `start`.
///
/// `start` and each of its ancestors are checked nearest first; `user_dir`
/// is consulted only when no ancestor has a config. Directories that happen
/// to be named pxshift.toml are skipped.
pub fn discover_config(start: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    start
        .ancestors()
        .chain(user_dir)
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

/// Find pxshift.toml from the current working directory, falling back to
/// the per-user config directory.
pub fn find_config() -> Option<PathBuf> {
    let user_dir = user_config_dir();
    match env::current_dir() {
        Ok(cwd) => discover_config(&cwd, user_dir.as_deref()),
        Err(e) => {
            debug!("cannot read current directory ({}), checking user config only", e);
            user_dir.map(|dir| dir.join(CONFIG_FILE)).filter(|path| path.is_file())
        }
    }
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<PxsConfig, ConfigError> {
    debug!("loading shift config from {}", path.display());
    let content = fs::read_to_string(path)?;
    let config: PxsConfig = toml::from_str(&content)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    Ok(config)
}

/// Load an explicit config file, or discover one, or fall back to defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<PxsConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => match find_config() {
            Some(found) => load_config(&found),
            None => {
                debug!("no {} found, using defaults", CONFIG_FILE);
                Ok(PxsConfig::default())
            }
        },
    }
}

/// Apply CLI overrides to a loaded config.
pub fn merge_cli_overrides(config: &mut PxsConfig, overrides: &CliOverrides) {
    if let Some(active) = overrides.active {
        config.shift.active = active;
    }
}
