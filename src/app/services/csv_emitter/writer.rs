//! Record flattening and CSV serialization
//!
//! Output rows follow canvass order, then table order, then column
//! order, so the record set is deterministic for a given report. The
//! header row is always written, even when every office is filtered.

use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, info};

use crate::app::models::{OfficeCanvass, ResultRecord};
use crate::app::services::office_registry::OfficeRegistry;
use crate::constants::OUTPUT_COLUMNS;
use crate::error::Result;

/// Emission statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmitStats {
    /// Canvasses that produced output rows
    pub canvasses_emitted: usize,

    /// Canvasses dropped by the office publication filter
    pub offices_excluded: usize,

    /// Data rows written (header row excluded)
    pub records_written: usize,
}

/// Writes parsed canvasses as flat CSV records.
#[derive(Debug)]
pub struct CsvEmitter<'a> {
    registry: &'a OfficeRegistry,
    county: String,
}

impl<'a> CsvEmitter<'a> {
    pub fn new(registry: &'a OfficeRegistry, county: impl Into<String>) -> Self {
        Self {
            registry,
            county: county.into(),
        }
    }

    /// Emit all canvasses to the given writer, returning statistics.
    pub fn emit<W: Write>(&self, canvasses: &[OfficeCanvass], out: W) -> Result<EmitStats> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);
        writer.write_record(OUTPUT_COLUMNS)?;

        let mut stats = EmitStats::default();
        for canvass in canvasses {
            self.emit_canvass(&mut writer, canvass, &mut stats)?;
        }
        writer.flush()?;

        info!(
            "Wrote {} records from {} canvasses ({} offices excluded)",
            stats.records_written, stats.canvasses_emitted, stats.offices_excluded
        );
        Ok(stats)
    }

    /// Emit one canvass; an unpublished office yields no records.
    pub fn emit_canvass<W: Write>(
        &self,
        writer: &mut csv::Writer<W>,
        canvass: &OfficeCanvass,
        stats: &mut EmitStats,
    ) -> Result<()> {
        let Some(office) = self.registry.display_office(&canvass.office) else {
            debug!("excluding unpublished office '{}'", canvass.office);
            stats.offices_excluded += 1;
            return Ok(());
        };

        for (precinct, votes) in canvass.results() {
            for (candidate, vote) in canvass.candidates.iter().zip(votes) {
                writer.serialize(ResultRecord {
                    county: self.county.clone(),
                    precinct: precinct.clone(),
                    office: office.to_string(),
                    district: canvass.district.clone(),
                    party: canvass.party.clone(),
                    candidate: self.registry.display_candidate(candidate),
                    votes: vote.clone(),
                })?;
                stats.records_written += 1;
            }
        }
        stats.canvasses_emitted += 1;
        Ok(())
    }
}
