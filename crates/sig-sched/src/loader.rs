//! CSV vehicle-count loader.
//!
//! This is the hand-off point from the external counting process.
//!
//! # CSV format
//!
//! One row per lane, in the order lanes should be considered on ties.
//!
//! ```csv
//! lane_id,vehicles
//! lane1.jpg,12
//! lane2.jpg,7
//! lane3.jpg,0
//! ```
//!
//! `vehicles` must be a non-negative integer.  Negative values, fractions,
//! and non-numeric text are all rejected as invalid input rather than
//! truncated or clamped.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{SchedError, SchedResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CountRecord {
    lane_id:  String,
    vehicles: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an ordered `(lane name, count)` snapshot from a CSV file.
pub fn load_counts_csv(path: &Path) -> SchedResult<Vec<(String, u32)>> {
    let file = std::fs::File::open(path).map_err(SchedError::Io)?;
    load_counts_reader(file)
}

/// Like [`load_counts_csv`] but accepts any `Read` source.
pub fn load_counts_reader<R: Read>(reader: R) -> SchedResult<Vec<(String, u32)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut counts = Vec::new();
    for (row, result) in csv_reader.deserialize::<CountRecord>().enumerate() {
        // Header is line 1.
        let line = row + 2;
        let rec = result.map_err(|e| row_error(line, e))?;
        if rec.lane_id.is_empty() {
            return Err(SchedError::InvalidInput(format!("line {line}: blank lane_id")));
        }
        let vehicles = parse_count(&rec.vehicles)
            .map_err(|msg| SchedError::InvalidInput(format!("line {line}: {msg}")))?;
        counts.push((rec.lane_id, vehicles));
    }

    Ok(counts)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Read failures stay I/O errors; anything else is a malformed row.
fn row_error(line: usize, e: csv::Error) -> SchedError {
    let msg = format!("line {line}: {e}");
    match e.into_kind() {
        csv::ErrorKind::Io(io) => SchedError::Io(io),
        _ => SchedError::InvalidInput(msg),
    }
}

fn parse_count(s: &str) -> Result<u32, String> {
    let n: i64 = s
        .parse()
        .map_err(|_| format!("vehicle count {s:?} is not an integer"))?;
    u32::try_from(n).map_err(|_| format!("vehicle count {n} is out of range"))
}
