use clap::Parser;
use staf_converter::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - any report has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("STAF Converter - Vessel Profile Converter");
    println!("=========================================");
    println!();
    println!("Convert STAF vessel profile files into hierarchical OpenVesselSpec");
    println!("JSON documents with normalized centers of gravity.");
    println!();
    println!("USAGE:");
    println!("    staf-converter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert a STAF file to an OpenVesselSpec JSON document");
    println!("    inspect     Show the sections of a STAF file without converting it");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a vessel profile to pretty-printed JSON:");
    println!("    staf-converter convert --input vessel.staf --lpp 294.5 --output vessel.json");
    println!();
    println!("    # Convert to stdout as compact JSON:");
    println!("    staf-converter convert --input vessel.staf --lpp 294.5 --compact");
    println!();
    println!("    # List the sections of a file:");
    println!("    staf-converter inspect --input vessel.staf");
    println!();
    println!("For detailed help on any command, use:");
    println!("    staf-converter <COMMAND> --help");
}
