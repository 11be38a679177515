//! `ScheduleOutputObserver<W>` — bridges `ScheduleObserver` to an `OutputWriter`.

use log::warn;
use sig_core::LaneSet;
use sig_sched::{Cycle, ScheduleObserver, ScheduleSummary};

use crate::row::{CycleRow, LaneStateRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ScheduleObserver`] that writes every cycle and the lane state after it
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `sched.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ScheduleOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ScheduleOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sched.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("schedule output failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ScheduleObserver for ScheduleOutputObserver<W> {
    fn on_schedule_start(&mut self, lanes: &LaneSet) {
        let result = self.writer.write_lane_states(&LaneStateRow::snapshot(0, lanes));
        self.store_err(result);
    }

    fn on_cycle(&mut self, cycle: &Cycle, lanes: &LaneSet) {
        let result = self.writer.write_cycle(&CycleRow::from_cycle(cycle, lanes));
        self.store_err(result);
        let result = self
            .writer
            .write_lane_states(&LaneStateRow::snapshot(cycle.cycle_number, lanes));
        self.store_err(result);
    }

    fn on_schedule_end(&mut self, _summary: &ScheduleSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
