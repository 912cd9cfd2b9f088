//! Inspect command implementation
//!
//! Scans a STAF file and prints its section structure without converting,
//! which is handy for checking what a file contains and whether it would
//! be accepted at all.

use std::fs;

use colored::*;
use tracing::debug;

use super::shared::setup_logging;
use crate::app::services::section_scanner::SectionMap;
use crate::cli::args::InspectArgs;
use crate::constants::MANDATORY_SECTIONS;
use crate::error::Result;

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let content = fs::read_to_string(&args.input_path)?;
    let sections = SectionMap::scan(&content);

    println!(
        "\n{} {}",
        "STAF sections in".bright_green().bold(),
        args.input_path.display().to_string().bright_white().bold()
    );
    for section in sections.iter() {
        let marker = if MANDATORY_SECTIONS.contains(&section.name.as_str()) {
            "*".bright_yellow()
        } else {
            " ".normal()
        };
        println!(
            "  {} {:<12} {:>4} columns {:>6} rows",
            marker,
            section.name.bright_cyan(),
            section.header.len().to_string().bright_white(),
            section.rows.len().to_string().bright_white()
        );
    }

    let missing = sections.missing_mandatory();
    if !missing.is_empty() {
        println!(
            "\n  {} {}",
            "Missing mandatory sections:".bright_red().bold(),
            missing.join(", ").bright_red()
        );
    }

    // Exit code reflects whether the file would convert
    sections.check_mandatory()?;
    Ok(())
}
