use canvass_processor::cli::{args::Args, commands};
use clap::Parser;
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
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
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
    println!("Canvass Processor - Election Canvass Report Extractor");
    println!("=====================================================");
    println!();
    println!("Extract precinct-level election results from the fixed-width canvass");
    println!("reports printed by county tabulation systems into a flat CSV record set.");
    println!();
    println!("USAGE:");
    println!("    canvass-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Parse a report and write the CSV record set (main command)");
    println!("    inspect     Parse a report and pretty-print each office canvass");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process a report with the default election identity:");
    println!("    canvass-processor process --input canvass.txt");
    println!();
    println!("    # Process from standard input and write to standard output:");
    println!("    canvass-processor process -o - < canvass.txt");
    println!();
    println!("    # Override the election identity used for the output filename:");
    println!("    canvass-processor process --input canvass.txt \\");
    println!("                              --county Lane --state or --election-date 2004-05-18");
    println!();
    println!("    # Inspect the parsed canvasses without writing CSV:");
    println!("    canvass-processor inspect --input canvass.txt --summary");
    println!();
    println!("For detailed help on any command, use:");
    println!("    canvass-processor <COMMAND> --help");
}
