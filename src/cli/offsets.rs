//! Offsets command implementation

use std::process::ExitCode;

use serde::Serialize;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::config::PxsConfig;
use crate::transforms::{line_offsets, Axis, ShiftKind};

/// JSON report for a single line
#[derive(Debug, Serialize)]
struct OffsetsReport {
    active: ShiftKind,
    description: String,
    axis: Axis,
    line: i32,
    shift: i32,
    offsets: Vec<i32>,
}

/// Print the offsets for one row or column as JSON.
///
/// Dimensions beyond the signed coordinate range are rejected as invalid arguments.
pub fn run_offsets(
    config: &PxsConfig,
    width: u32,
    height: u32,
    shift: i32,
    axis: Axis,
    line: i32,
) -> ExitCode {
    let manager = config.to_manager();
    let offsets = match line_offsets(&manager, axis, line, width, height, shift) {
        Ok(offsets) => offsets,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let report = OffsetsReport {
        active: manager.active_kind(),
        description: manager.describe(),
        axis,
        line,
        shift,
        offsets,
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: failed to serialize offsets: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
