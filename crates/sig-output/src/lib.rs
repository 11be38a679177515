//! `sig-output` — schedule output writers for the smart_signal scheduler.
//!
//! | Backend | Files created                       |
//! |---------|-------------------------------------|
//! | CSV     | `cycles.csv`, `lane_states.csv`     |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`ScheduleOutputObserver`], which implements `sig_sched::ScheduleObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sig_output::{CsvWriter, ScheduleOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ScheduleOutputObserver::new(writer);
//! sched.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ScheduleOutputObserver;
pub use row::{CycleRow, LaneStateRow};
pub use writer::OutputWriter;
