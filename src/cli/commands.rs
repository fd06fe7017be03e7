//! Command implementations for the canvass processor CLI
//!
//! This module contains the command execution logic, logging setup,
//! progress reporting, and the final run summary.

use crate::app::services::canvass_parser::{BlockFailure, CanvassParser, ParseStats};
use crate::app::services::canvass_parser::encoding::{read_report, read_report_file};
use crate::app::services::csv_emitter::CsvEmitter;
use crate::app::services::office_registry::OfficeRegistry;
use crate::cli::args::{Args, Commands, InspectArgs, ProcessArgs};
use crate::config::{Config, ElectionConfig};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Run statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of office blocks found by segmentation
    pub blocks_found: usize,
    /// Number of blocks parsed into canvasses
    pub blocks_parsed: usize,
    /// Number of blocks skipped due to per-block errors
    pub blocks_skipped: usize,
    /// Number of data rows written
    pub records_written: usize,
    /// Number of canvasses dropped by the office publication filter
    pub offices_excluded: usize,
    /// Skipped blocks with reasons
    pub failures: Vec<BlockFailure>,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Main command runner for the canvass processor
///
/// Orchestrates the processing workflow:
/// 1. Set up logging
/// 2. Validate arguments and build the run configuration
/// 3. Parse the report with progress reporting
/// 4. Emit records and print the run summary
pub fn run(args: Args) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("Starting canvass processor");
    debug!("Command line arguments: {:?}", args);

    let Some(command) = args.command.clone() else {
        bail!("no command provided");
    };

    let mut stats = match command {
        Commands::Process(ref process_args) => process_report(&args, process_args)?,
        Commands::Inspect(ref inspect_args) => inspect_report(inspect_args)?,
    };
    stats.processing_time = start_time.elapsed();

    if !args.quiet {
        print_summary(&stats);
    }
    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("canvass_processor={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with uptime timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Execute the process command: parse the report and write the CSV
/// record set.
fn process_report(args: &Args, process_args: &ProcessArgs) -> Result<RunStats> {
    process_args.validate()?;

    let config = Config {
        election: ElectionConfig {
            county: process_args.county.clone(),
            state: process_args.state.clone(),
            race: process_args.race.clone(),
            date: process_args.election_date,
        },
        input_path: process_args.input_path.clone(),
        output_path: process_args.output_path.clone(),
    };
    config.validate()?;

    let content = read_input(&config.input_path)?;
    let parser = CanvassParser::new();
    let blocks = parser.segment(&content);
    info!("Found {} office blocks", blocks.len());

    // Progress reporting over office blocks
    let progress_bar = if args.show_progress() && !blocks.is_empty() {
        let pb = ProgressBar::new(blocks.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Parsing office blocks");
        Some(pb)
    } else {
        None
    };

    let mut parse_stats = ParseStats::new();
    parse_stats.blocks_found = blocks.len();
    let mut canvasses = Vec::new();

    for block in &blocks {
        if let Some(pb) = &progress_bar {
            pb.set_message(block.title().to_string());
            pb.inc(1);
        }

        match parser.parse_block(block) {
            Ok(canvass) => {
                canvasses.push(canvass);
                parse_stats.record_parsed();
            }
            Err(e) => {
                warn!("skipping block '{}': {}", block.title(), e);
                parse_stats.record_skipped(block.title(), e.to_string());
            }
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Parsing complete");
    }

    // Emit records through the publication filter
    let registry = OfficeRegistry::new();
    let emitter = CsvEmitter::new(&registry, &config.election.county);
    let output_file = config.output_file();

    let emit_stats = if output_file == Path::new("-") {
        emitter.emit(&canvasses, std::io::stdout().lock())?
    } else {
        let file = std::fs::File::create(&output_file).with_context(|| {
            format!("failed to create output file '{}'", output_file.display())
        })?;
        let emit_stats = emitter.emit(&canvasses, file)?;
        info!("Wrote {}", output_file.display());
        emit_stats
    };

    Ok(RunStats {
        blocks_found: parse_stats.blocks_found,
        blocks_parsed: parse_stats.blocks_parsed,
        blocks_skipped: parse_stats.blocks_skipped,
        records_written: emit_stats.records_written,
        offices_excluded: emit_stats.offices_excluded,
        failures: parse_stats.failures,
        ..Default::default()
    })
}

/// Execute the inspect command: parse the report and pretty-print each
/// canvass without writing CSV.
fn inspect_report(inspect_args: &InspectArgs) -> Result<RunStats> {
    inspect_args.validate()?;

    let content = read_input(&inspect_args.input_path)?;
    let parser = CanvassParser::new();
    let result = parser.parse_report(&content);

    for canvass in &result.canvasses {
        let title = format!("{} {}", canvass.party, canvass.office);
        println!("{}", title.trim().bold());
        if !canvass.district.is_empty() {
            println!("  district:   {}", canvass.district);
        }
        println!("  candidates: {}", canvass.candidates.join(", "));

        if inspect_args.summary {
            println!("  precincts:  {}", canvass.precinct_count());
        } else {
            for (precinct, votes) in canvass.results() {
                println!("    {:<28} {}", precinct, votes.join("  "));
            }
        }
        println!("=====");
    }

    Ok(RunStats {
        blocks_found: result.stats.blocks_found,
        blocks_parsed: result.stats.blocks_parsed,
        blocks_skipped: result.stats.blocks_skipped,
        failures: result.stats.failures,
        ..Default::default()
    })
}

/// Read and decode the report from a file or standard input
fn read_input(input_path: &Option<PathBuf>) -> Result<String> {
    match input_path {
        Some(path) => read_report_file(path)
            .with_context(|| format!("failed to read input '{}'", path.display())),
        None => {
            info!("Reading report from standard input");
            read_report(std::io::stdin().lock()).context("failed to read standard input")
        }
    }
}

/// Print the human-readable run summary
fn print_summary(stats: &RunStats) {
    let duration = HumanDuration(stats.processing_time);

    println!();
    println!("{}", "Canvass processing complete".green().bold());
    println!("  Office blocks found: {}", stats.blocks_found);
    println!("  Blocks parsed:       {}", stats.blocks_parsed);
    println!("  Records written:     {}", stats.records_written);
    println!("  Offices excluded:    {}", stats.offices_excluded);
    println!("  Processing time:     {}", duration);

    if !stats.failures.is_empty() {
        println!();
        let heading = format!("Skipped {} block(s):", stats.failures.len());
        println!("{}", heading.as_str().yellow().bold());
        for failure in &stats.failures {
            let block = format!("  • {}:", failure.block);
            println!("{} {}", block.as_str().yellow(), failure.reason);
        }
    }
    println!();
}
