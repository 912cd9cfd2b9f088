//! Command implementations for the STAF converter CLI
//!
//! This module contains the command execution logic and reporting for the
//! CLI interface. Each command is implemented in its own module:
//! - `convert`: full STAF to OpenVesselSpec conversion
//! - `inspect`: section listing without conversion

pub mod convert;
pub mod inspect;
pub mod shared;

pub use shared::ConversionStats;

use crate::cli::args::{Args, Commands};
use crate::error::{Result, StafError};

/// Main command runner for the STAF converter
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Convert(convert_args)) => {
            convert::run_convert(convert_args).map(|_| ())
        }
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args),
        None => Err(StafError::configuration("No command specified".to_string())),
    }
}
