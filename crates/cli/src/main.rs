//! semver-inc - print the version that follows a MAJOR.MINOR.PATCH string
//!
//! Exactly one line is written to stdout: the next version, or the
//! sentinel `0.0.0` when the input is not a version.

mod cli;
mod logging;

use clap::Parser;
use cli::Cli;
use semver_inc_core::constants::SENTINEL_VERSION;
use semver_inc_core::{increment, VERSION};
use std::process::ExitCode;
use tracing::debug;

/// Exit status for an input that is not a version
const EXIT_INVALID_VERSION: u8 = 1;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.log_format) {
        eprintln!("warning: {:#} (continuing without logs)", e);
    }

    debug!("semver-inc v{} starting", VERSION);

    let component = cli.component();
    debug!(version = %cli.input, component = %component, "Incrementing");

    match increment(&cli.input, component) {
        Ok(next) => {
            println!("{}", next);
            ExitCode::SUCCESS
        }
        Err(_) => {
            println!("{}", SENTINEL_VERSION);
            ExitCode::from(EXIT_INVALID_VERSION)
        }
    }
}
