//! The `OutputWriter` trait implemented by backend writers.

use crate::{CycleRow, LaneStateRow, OutputResult};

/// Sink for schedule output.
///
/// Errors are stored by the observer and retrieved with
/// [`ScheduleOutputObserver::take_error`][crate::ScheduleOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one green-phase row.
    fn write_cycle(&mut self, row: &CycleRow) -> OutputResult<()>;

    /// Write a batch of lane-state rows.
    fn write_lane_states(&mut self, rows: &[LaneStateRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
