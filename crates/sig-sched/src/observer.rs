//! Observer trait for reporting and data collection.

use sig_core::LaneSet;

use crate::{Cycle, ScheduleSummary};

/// Callbacks invoked by [`LaneScheduler::run`][crate::LaneScheduler::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — cycle printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl ScheduleObserver for Printer {
///     fn on_cycle(&mut self, cycle: &Cycle, lanes: &LaneSet) {
///         println!("cycle {}: green {}", cycle.cycle_number, lanes.name(cycle.selected_lane));
///     }
/// }
/// ```
pub trait ScheduleObserver {
    /// Called once before the first cycle with the initial snapshot.
    fn on_schedule_start(&mut self, _lanes: &LaneSet) {}

    /// Called after each cycle's drain.  `lanes` reflects the post-drain
    /// state, so `lanes.select_next()` is the next lane to go green.
    fn on_cycle(&mut self, _cycle: &Cycle, _lanes: &LaneSet) {}

    /// Called once when every lane is clear.
    fn on_schedule_end(&mut self, _summary: &ScheduleSummary) {}
}

/// A [`ScheduleObserver`] that does nothing.
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {}
