//! Pixelshift - command-line tool for inspecting pixel-displacement transforms

use std::process::ExitCode;

use pixelshift::cli;

fn main() -> ExitCode {
    cli::run()
}
