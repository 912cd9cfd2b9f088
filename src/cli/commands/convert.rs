//! Convert command implementation
//!
//! Reads a STAF file, runs the conversion pipeline and writes the resulting
//! OpenVesselSpec JSON document to a file or stdout.

use std::fs;
use std::time::Instant;

use colored::*;
use tracing::{debug, info};

use super::shared::{ConversionStats, setup_logging};
use crate::app::services::converter::convert;
use crate::cli::args::ConvertArgs;
use crate::config::ConversionConfig;
use crate::error::Result;

/// Convert command runner
///
/// 1. Set up logging and validate arguments
/// 2. Read and convert the input file
/// 3. Write the JSON document to the requested target
/// 4. Print a summary unless in quiet mode
pub fn run_convert(args: ConvertArgs) -> Result<ConversionStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting STAF conversion");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config =
        ConversionConfig::new(args.lpp_millimeters()).with_vcg_height_factor(args.height_factor);

    let content = fs::read_to_string(&args.input_path)?;
    info!(
        "Read {} bytes from {}",
        content.len(),
        args.input_path.display()
    );

    let document = convert(&content, &config)?;
    let json = document.to_json_string(!args.compact)?;

    let mut stats = ConversionStats::from_document(&document);
    stats.output_bytes = json.len() as u64;

    match &args.output_path {
        Some(path) => {
            fs::write(path, &json)?;
            info!("Wrote document to {}", path.display());
        }
        None => println!("{json}"),
    }

    stats.processing_time = start_time.elapsed();

    // The summary only goes to stdout when the document does not
    if args.show_report() && args.output_path.is_some() {
        print_report(&stats);
    }

    Ok(stats)
}

fn print_report(stats: &ConversionStats) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time.as_millis().to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Bay sections:".bright_cyan(),
        stats.bay_sections.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Rows:".bright_cyan(),
        stats.rows.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Slots:".bright_cyan(),
        stats.slots.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Hatch lids:".bright_cyan(),
        stats.lids.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Master CG values:".bright_cyan(),
        stats.master_cg_values.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Output size:".bright_cyan(),
        ConversionStats::format_size(stats.output_bytes)
            .bright_white()
            .bold()
    );
}
