//! Configuration module for pixelshift
//!
//! Provides types, parsing and discovery for `pxshift.toml`.

pub mod loader;
pub mod schema;

pub use loader::{
    discover_config, find_config, load_config, load_config_or_default, merge_cli_overrides,
    user_config_dir, CliOverrides, ConfigError, CONFIG_FILE,
};
pub use schema::*;
