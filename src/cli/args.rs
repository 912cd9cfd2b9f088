//! Command-line argument definitions for the STAF converter
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::models::Millimeters;
use crate::constants::{DEFAULT_VCG_HEIGHT_FACTOR, MILLIMETERS_PER_METER};
use crate::error::{Result, StafError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the STAF converter
///
/// Converts STAF vessel profile files into OpenVesselSpec JSON documents.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "staf-converter",
    version,
    about = "Convert STAF vessel profiles to OpenVesselSpec JSON",
    long_about = "Converts the tab-separated STAF vessel profile format into hierarchical \
                  OpenVesselSpec JSON documents. Normalizes all centers of gravity onto the \
                  document reference frames and consolidates repeated row values into \
                  vessel-wide masters."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the STAF converter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a STAF file to an OpenVesselSpec JSON document
    Convert(ConvertArgs),
    /// Show the sections of a STAF file without converting it
    Inspect(InspectArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input STAF file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input STAF file"
    )]
    pub input_path: PathBuf,

    /// Output path for the generated JSON document
    ///
    /// If not specified, the document is written to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the JSON document (stdout if omitted)"
    )]
    pub output_path: Option<PathBuf>,

    /// Length between perpendiculars in meters
    ///
    /// STAF files do not carry the vessel length, but remapping LCGs measured
    /// from midships or the forward perpendicular requires it.
    #[arg(
        long = "lpp",
        value_name = "METERS",
        help = "Length between perpendiculars in meters"
    )]
    pub lpp: f64,

    /// Height factor for deriving row bottom bases from tier VCGs
    ///
    /// Fraction of the nominal container height assumed between a tier's VCG
    /// reference and the base of the row. Only used when the file declares
    /// per-tier VCG values.
    #[arg(
        long = "height-factor",
        value_name = "FACTOR",
        default_value_t = DEFAULT_VCG_HEIGHT_FACTOR,
        help = "Fraction of container height between a tier VCG and the row base"
    )]
    pub height_factor: f64,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long = "compact", help = "Emit compact JSON on a single line")]
    pub compact: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input STAF file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input STAF file"
    )]
    pub input_path: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(StafError::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }

        if !self.input_path.is_file() {
            return Err(StafError::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        if !self.lpp.is_finite() || self.lpp <= 0.0 {
            return Err(StafError::configuration(
                "Length between perpendiculars must be greater than 0".to_string(),
            ));
        }

        if !self.height_factor.is_finite() || !(0.0..=1.0).contains(&self.height_factor) {
            return Err(StafError::configuration(
                "Height factor must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }

    /// Length between perpendiculars converted to millimeters
    pub fn lpp_millimeters(&self) -> Millimeters {
        (self.lpp * MILLIMETERS_PER_METER).round() as Millimeters
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if the conversion report should be printed (not in quiet mode)
    pub fn show_report(&self) -> bool {
        !self.quiet
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(StafError::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
