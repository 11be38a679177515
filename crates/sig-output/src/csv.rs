//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `cycles.csv`
//! - `lane_states.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CycleRow, LaneStateRow, OutputResult};

pub const CYCLES_FILE: &str = "cycles.csv";
pub const LANE_STATES_FILE: &str = "lane_states.csv";

/// Writes schedule output to two CSV files.
pub struct CsvWriter {
    cycles:      Writer<File>,
    lane_states: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut cycles = Writer::from_path(dir.join(CYCLES_FILE))?;
        cycles.write_record([
            "cycle",
            "lane",
            "started_at_secs",
            "green_secs",
            "waiting_before",
            "vehicles_passed",
            "waiting_after",
        ])?;

        let mut lane_states = Writer::from_path(dir.join(LANE_STATES_FILE))?;
        lane_states.write_record(["cycle", "lane", "waiting"])?;

        Ok(Self {
            cycles,
            lane_states,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_cycle(&mut self, row: &CycleRow) -> OutputResult<()> {
        self.cycles.write_record(&[
            row.cycle.to_string(),
            row.lane.clone(),
            row.started_at_secs.to_string(),
            row.green_secs.to_string(),
            row.waiting_before.to_string(),
            row.vehicles_passed.to_string(),
            row.waiting_after.to_string(),
        ])?;
        Ok(())
    }

    fn write_lane_states(&mut self, rows: &[LaneStateRow]) -> OutputResult<()> {
        for row in rows {
            self.lane_states.write_record(&[
                row.cycle.to_string(),
                row.lane.clone(),
                row.waiting.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.cycles.flush()?;
        self.lane_states.flush()?;
        Ok(())
    }
}
