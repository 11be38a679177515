//! Plain records produced by the cycle loop.

use sig_core::LaneId;

/// One scheduling decision: which lane went green and what happened to it.
///
/// Produced, reported, and discarded each iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cycle {
    /// 1-based, strictly increasing.
    pub cycle_number:    u64,
    pub selected_lane:   LaneId,
    /// Simulated seconds elapsed before this green phase began.
    pub started_at_secs: u64,
    pub waiting_before:  u32,
    pub green_duration:  u32,
    pub vehicles_passed: u32,
    pub waiting_after:   u32,
}

impl Cycle {
    /// Simulated second at which this green phase ends.
    #[inline]
    pub fn ended_at_secs(&self) -> u64 {
        self.started_at_secs + self.green_duration as u64
    }
}

/// Totals reported once the loop reaches the terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub cycles:          u64,
    pub elapsed_secs:    u64,
    pub vehicles_served: u64,
}
