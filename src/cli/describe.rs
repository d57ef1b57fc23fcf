//! Describe command implementation

use std::process::ExitCode;

use super::EXIT_SUCCESS;
use crate::config::PxsConfig;

/// Print the step description for the configured variant.
///
/// The default variant has an empty description, so an empty line is printed.
pub fn run_describe(config: &PxsConfig) -> ExitCode {
    let manager = config.to_manager();
    println!("{}", manager.describe());
    ExitCode::from(EXIT_SUCCESS)
}
