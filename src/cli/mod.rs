//! Command-line interface implementation
//!
//! A thin caller around the transform core: it loads `pxshift.toml`, applies
//! overrides, and reports descriptions or offsets.

mod describe;
mod offsets;

use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config_or_default, merge_cli_overrides, CliOverrides, PxsConfig};
use crate::transforms::{Axis, ShiftKind};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pixelshift - pixel-displacement transforms for row/column shift effects
#[derive(Parser)]
#[command(name = "pxshift")]
#[command(about = "Pixelshift - inspect pixel-displacement transforms for row/column shift effects")]
#[command(version)]
pub struct Cli {
    /// Path to pxshift.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the step description of the active variant
    Describe {
        /// Override the active variant (name or index)
        #[arg(long)]
        active: Option<String>,
    },

    /// Print the offsets for one row or column as JSON
    Offsets {
        /// Image width in pixels
        #[arg(long)]
        width: u32,

        /// Image height in pixels
        #[arg(long)]
        height: u32,

        /// Shift magnitude for the line
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        shift: i32,

        /// Axis of the pass
        #[arg(long, value_enum, default_value = "horizontal")]
        axis: AxisArg,

        /// Row (horizontal) or column (vertical) index
        #[arg(long, default_value = "0")]
        line: i32,

        /// Override the active variant (name or index)
        #[arg(long)]
        active: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum AxisArg {
    Horizontal,
    Vertical,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Horizontal => Axis::Horizontal,
            AxisArg::Vertical => Axis::Vertical,
        }
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Describe { active } => {
            match resolve_config(cli.config.as_deref(), active.as_deref()) {
                Ok(config) => describe::run_describe(&config),
                Err(code) => code,
            }
        }
        Commands::Offsets { width, height, shift, axis, line, active } => {
            match resolve_config(cli.config.as_deref(), active.as_deref()) {
                Ok(config) => {
                    offsets::run_offsets(&config, width, height, shift, axis.into(), line)
                }
                Err(code) => code,
            }
        }
    }
}

/// Load the config and apply the `--active` override.
fn resolve_config(
    path: Option<&std::path::Path>,
    active: Option<&str>,
) -> Result<PxsConfig, ExitCode> {
    let active = match active.map(str::parse::<ShiftKind>).transpose() {
        Ok(active) => active,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };

    let mut config = match load_config_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    };

    merge_cli_overrides(&mut config, &CliOverrides { active });
    Ok(config)
}
