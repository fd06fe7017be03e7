//! Configuration management and validation.
//!
//! Provides the run configuration for a processing pass: the election
//! identity stamped on output records and used to derive the output
//! filename, and the input/output locations.

use crate::constants::{DEFAULT_COUNTY, DEFAULT_ELECTION_DATE, DEFAULT_RACE, DEFAULT_STATE};
use crate::error::{CanvassError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Election identity for one processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectionConfig {
    /// County the report covers; written to the `county` output column
    pub county: String,

    /// Two-letter state code used in the output filename
    pub state: String,

    /// Race type used in the output filename (e.g. "primary", "general")
    pub race: String,

    /// Election date used in the output filename
    pub date: NaiveDate,
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self {
            county: DEFAULT_COUNTY.to_string(),
            state: DEFAULT_STATE.to_string(),
            race: DEFAULT_RACE.to_string(),
            date: DEFAULT_ELECTION_DATE
                .parse()
                .expect("default election date is a valid ISO date"),
        }
    }
}

/// Run configuration for the canvass processor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Election identity
    pub election: ElectionConfig,

    /// Input report path; `None` reads standard input
    pub input_path: Option<PathBuf>,

    /// Output CSV path; `None` derives the conventional filename
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.election.county.trim().is_empty() {
            return Err(CanvassError::configuration("county must not be empty"));
        }

        if self.election.state.len() != 2 || !self.election.state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CanvassError::configuration(format!(
                "state must be a two-letter code, got '{}'",
                self.election.state
            )));
        }

        if self.election.race.trim().is_empty() {
            return Err(CanvassError::configuration("race must not be empty"));
        }

        Ok(())
    }

    /// The output file for this run: the configured path, or the
    /// conventional name `{date}__{state}__{race}__{county}__precinct.csv`
    /// (e.g. `20040518__or__primary__lane__precinct.csv`).
    pub fn output_file(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => PathBuf::from(format!(
                "{}__{}__{}__{}__precinct.csv",
                self.election.date.format("%Y%m%d"),
                self.election.state.to_lowercase(),
                self.election.race.to_lowercase(),
                self.election.county.to_lowercase(),
            )),
        }
    }
}
