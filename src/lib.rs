//! Pixelshift - pluggable pixel-displacement transforms
//!
//! This library provides:
//! - Five displacement variants (default, scale, linear, skew, xy-multiply)
//! - A manager that selects the active variant and holds every variant's parameters
//! - A row/column shift pass over RGBA images
//! - `pxshift.toml` configuration loading

pub mod cli;
pub mod config;
pub mod transforms;
