//! Plain data row types written by output backends.

use sig_core::LaneSet;
use sig_sched::Cycle;

/// One green phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleRow {
    pub cycle:           u64,
    pub lane:            String,
    pub started_at_secs: u64,
    pub green_secs:      u32,
    pub waiting_before:  u32,
    pub vehicles_passed: u32,
    pub waiting_after:   u32,
}

impl CycleRow {
    pub fn from_cycle(cycle: &Cycle, lanes: &LaneSet) -> Self {
        Self {
            cycle:           cycle.cycle_number,
            lane:            lanes.name(cycle.selected_lane).to_owned(),
            started_at_secs: cycle.started_at_secs,
            green_secs:      cycle.green_duration,
            waiting_before:  cycle.waiting_before,
            vehicles_passed: cycle.vehicles_passed,
            waiting_after:   cycle.waiting_after,
        }
    }
}

/// Waiting count of one lane after a given cycle.  Cycle 0 is the initial
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneStateRow {
    pub cycle:   u64,
    pub lane:    String,
    pub waiting: u32,
}

impl LaneStateRow {
    /// One row per lane, in insertion order.
    pub fn snapshot(cycle: u64, lanes: &LaneSet) -> Vec<Self> {
        lanes
            .iter()
            .map(|(_, lane)| Self {
                cycle,
                lane:    lane.name.clone(),
                waiting: lane.waiting,
            })
            .collect()
    }
}
