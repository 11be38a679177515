//! The `LaneScheduler` struct and its cycle loop.

use std::iter::FusedIterator;

use log::{debug, info, warn};
use sig_core::{LaneId, LaneSet, SignalConfig};

use crate::{Cycle, ScheduleObserver, ScheduleSummary, SchedResult};

// ── ScheduleState ─────────────────────────────────────────────────────────────

/// Two-state machine.  `Terminal` is absorbing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleState {
    /// At least one lane has vehicles waiting.
    Running,
    /// Every lane is empty.
    Terminal,
}

// ── LaneScheduler ─────────────────────────────────────────────────────────────

/// Greedy max-queue signal scheduler for a single intersection.
///
/// Exclusively owns the lane state for the duration of the run.  Each call to
/// [`step`][Self::step] grants one green phase:
///
/// 1. **Select**: the lane with the most waiting vehicles (first inserted on
///    ties).  If no lane has vehicles the schedule is terminal.
/// 2. **Green**: the fixed `green_duration_secs` from [`SignalConfig`].
/// 3. **Drain**: `min(throughput_per_cycle, waiting)` vehicles leave.
///
/// Construction is the only fallible operation.
#[derive(Clone, Debug)]
pub struct LaneScheduler {
    config:       SignalConfig,
    lanes:        LaneSet,
    /// Number assigned to the next emitted cycle (1-based).
    next_cycle:   u64,
    elapsed_secs: u64,
    served:       u64,
}

impl LaneScheduler {
    /// Build a scheduler from an ordered `(lane name, count)` snapshot.
    ///
    /// Fails with [`SchedError::InvalidInput`][crate::SchedError::InvalidInput]
    /// if the snapshot is empty or malformed, or if `config.throughput_per_cycle`
    /// is zero.
    pub fn new<I, S>(counts: I, config: SignalConfig) -> SchedResult<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        config.validate()?;
        Self::from_lanes(LaneSet::from_counts(counts)?, config)
    }

    /// Build a scheduler over an already-validated [`LaneSet`].
    pub fn from_lanes(lanes: LaneSet, config: SignalConfig) -> SchedResult<Self> {
        config.validate()?;
        if lanes.all_clear() {
            warn!("all {} lanes start empty; schedule is already terminal", lanes.len());
        }
        Ok(Self {
            config,
            lanes,
            next_cycle:   1,
            elapsed_secs: 0,
            served:       0,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Lazily run every remaining cycle.
    ///
    /// The returned iterator borrows the scheduler mutably and drains its
    /// state as it goes; once exhausted it stays exhausted, and a fresh call
    /// yields nothing.
    pub fn run_to_completion(&mut self) -> Cycles<'_> {
        Cycles { sched: self }
    }

    /// Run to the terminal state, reporting every cycle to `observer`.
    pub fn run<O: ScheduleObserver>(&mut self, observer: &mut O) -> ScheduleSummary {
        info!(
            "schedule start: {} lanes, {} vehicles, green {} s, throughput {}",
            self.lanes.len(),
            self.lanes.total_waiting(),
            self.config.green_duration_secs,
            self.config.throughput_per_cycle,
        );
        observer.on_schedule_start(&self.lanes);

        while let Some(cycle) = self.step() {
            observer.on_cycle(&cycle, &self.lanes);
        }

        let summary = self.summary();
        info!(
            "schedule complete: {} cycles, {} vehicles served in {} s",
            summary.cycles, summary.vehicles_served, summary.elapsed_secs
        );
        observer.on_schedule_end(&summary);
        summary
    }

    /// Grant one green phase, or return `None` if every lane is clear.
    pub fn step(&mut self) -> Option<Cycle> {
        let lane = self.lanes.select_next()?;

        let waiting_before = self.lanes.waiting(lane);
        let vehicles_passed = self.lanes.drain(lane, self.config.throughput_per_cycle);
        let cycle = Cycle {
            cycle_number:    self.next_cycle,
            selected_lane:   lane,
            started_at_secs: self.elapsed_secs,
            waiting_before,
            green_duration:  self.config.green_duration_secs,
            vehicles_passed,
            waiting_after:   self.lanes.waiting(lane),
        };

        self.next_cycle += 1;
        self.elapsed_secs += self.config.green_duration_secs as u64;
        self.served += vehicles_passed as u64;

        debug!(
            "cycle {}: green {} for {} s, {} → {} ({} passed)",
            cycle.cycle_number,
            self.lanes.name(lane),
            cycle.green_duration,
            waiting_before,
            cycle.waiting_after,
            vehicles_passed,
        );
        Some(cycle)
    }

    /// The lane the next [`step`][Self::step] will turn green.
    pub fn peek_next(&self) -> Option<LaneId> {
        self.lanes.select_next()
    }

    pub fn state(&self) -> ScheduleState {
        if self.lanes.all_clear() {
            ScheduleState::Terminal
        } else {
            ScheduleState::Running
        }
    }

    /// Exact number of cycles left before the terminal state.
    ///
    /// Each cycle drains one lane by `min(throughput, waiting)`, so a lane
    /// with `w` vehicles is selected exactly `ceil(w / throughput)` times
    /// whatever the interleaving.
    pub fn remaining_cycles(&self) -> u64 {
        let t = self.config.throughput_per_cycle as u64;
        self.lanes
            .iter()
            .map(|(_, lane)| (lane.waiting as u64).div_ceil(t))
            .sum()
    }

    /// Current per-lane waiting counts.
    pub fn lanes(&self) -> &LaneSet {
        &self.lanes
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    pub fn cycles_run(&self) -> u64 {
        self.next_cycle - 1
    }

    /// Simulated seconds of green time granted so far.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            cycles:          self.cycles_run(),
            elapsed_secs:    self.elapsed_secs,
            vehicles_served: self.served,
        }
    }
}

// ── Cycles ────────────────────────────────────────────────────────────────────

/// Pull-based cycle sequence returned by [`LaneScheduler::run_to_completion`].
pub struct Cycles<'a> {
    sched: &'a mut LaneScheduler,
}

impl Cycles<'_> {
    /// Read-only view of the scheduler mid-iteration.
    pub fn scheduler(&self) -> &LaneScheduler {
        self.sched
    }
}

impl Iterator for Cycles<'_> {
    type Item = Cycle;

    fn next(&mut self) -> Option<Cycle> {
        self.sched.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.sched.remaining_cycles()).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cycles<'_> {}

impl FusedIterator for Cycles<'_> {}
