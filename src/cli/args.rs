//! Command-line argument definitions for the canvass processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use crate::constants::{DEFAULT_COUNTY, DEFAULT_ELECTION_DATE, DEFAULT_RACE, DEFAULT_STATE};
use crate::error::{CanvassError, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the canvass report processor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "canvass-processor",
    version,
    about = "Extract precinct-level election results from line-printer canvass reports",
    long_about = "Parses the fixed-width canvass reports printed by county tabulation \
                  systems, reconstructs each office's result table from its box-drawing \
                  column layout, and writes a flat CSV record set of per-precinct, \
                  per-candidate vote counts."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and disables the
    /// progress bar and final summary.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress output except errors"
    )]
    pub quiet: bool,
}

/// Available subcommands for the canvass processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a canvass report and write the CSV record set
    Process(ProcessArgs),
    /// Parse a canvass report and pretty-print each office canvass
    Inspect(InspectArgs),
}

/// Arguments for the process command (main extraction)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input canvass report
    ///
    /// Raw report file as produced by the tabulation system. Reads
    /// standard input when omitted.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input canvass report (defaults to standard input)"
    )]
    pub input_path: Option<PathBuf>,

    /// Output CSV path
    ///
    /// Defaults to the conventional filename derived from the election
    /// identity, e.g. 20040518__or__primary__lane__precinct.csv.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output CSV path ('-' for standard output)"
    )]
    pub output_path: Option<PathBuf>,

    /// County the report covers; stamped on every output record
    #[arg(
        long = "county",
        value_name = "NAME",
        default_value = DEFAULT_COUNTY,
        help = "County the report covers"
    )]
    pub county: String,

    /// Two-letter state code used in the derived output filename
    #[arg(
        long = "state",
        value_name = "CODE",
        default_value = DEFAULT_STATE,
        help = "Two-letter state code"
    )]
    pub state: String,

    /// Race type used in the derived output filename
    #[arg(
        long = "race",
        value_name = "RACE",
        default_value = DEFAULT_RACE,
        help = "Race type (e.g. primary, general)"
    )]
    pub race: String,

    /// Election date used in the derived output filename
    #[arg(
        long = "election-date",
        value_name = "DATE",
        default_value = DEFAULT_ELECTION_DATE,
        help = "Election date (YYYY-MM-DD)"
    )]
    pub election_date: NaiveDate,
}

/// Arguments for the inspect command (parsed canvass dump)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input canvass report
    ///
    /// Raw report file as produced by the tabulation system. Reads
    /// standard input when omitted.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input canvass report (defaults to standard input)"
    )]
    pub input_path: Option<PathBuf>,

    /// Summarize each canvass instead of printing per-precinct rows
    #[arg(long = "summary", help = "Omit per-precinct result rows")]
    pub summary: bool,
}

impl Args {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Whether to show the progress bar
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Validate that an input path, when given, points at a readable file
fn validate_input_path(input_path: &Option<PathBuf>) -> Result<()> {
    if let Some(path) = input_path {
        if !path.exists() {
            return Err(CanvassError::configuration(format!(
                "Input path does not exist: {}",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(CanvassError::configuration(format!(
                "Input path is not a file: {}",
                path.display()
            )));
        }
    }
    Ok(())
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_path(&self.input_path)
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_path(&self.input_path)
    }
}
