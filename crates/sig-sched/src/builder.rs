//! Fluent builder for constructing a [`LaneScheduler`].

use sig_core::{LaneSet, SignalConfig};

use crate::{LaneScheduler, SchedResult};

/// Fluent builder for [`LaneScheduler`].
///
/// # Optional inputs (have defaults)
///
/// | Method                      | Default                   |
/// |-----------------------------|---------------------------|
/// | `.config(c)`                | `SignalConfig::default()` |
/// | `.green_duration_secs(s)`   | 30                        |
/// | `.throughput_per_cycle(n)`  | 10                        |
///
/// Lanes are appended in call order, which is also the tie-break order.
///
/// # Example
///
/// ```rust,ignore
/// let sched = SchedulerBuilder::new()
///     .lane("north", 12)
///     .lane("east", 7)
///     .throughput_per_cycle(5)
///     .build()?;
/// ```
#[derive(Default)]
pub struct SchedulerBuilder {
    counts: Vec<(String, u32)>,
    config: SignalConfig,
}

impl SchedulerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one lane.
    pub fn lane(mut self, name: impl Into<String>, waiting: u32) -> Self {
        self.counts.push((name.into(), waiting));
        self
    }

    /// Append lanes from `(name, count)` pairs, keeping their order.
    pub fn lanes<I, S>(mut self, counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        self.counts
            .extend(counts.into_iter().map(|(name, n)| (name.into(), n)));
        self
    }

    /// Replace the whole timing config.
    pub fn config(mut self, config: SignalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn green_duration_secs(mut self, secs: u32) -> Self {
        self.config.green_duration_secs = secs;
        self
    }

    pub fn throughput_per_cycle(mut self, vehicles: u32) -> Self {
        self.config.throughput_per_cycle = vehicles;
        self
    }

    /// Validate inputs and return a ready-to-run [`LaneScheduler`].
    pub fn build(self) -> SchedResult<LaneScheduler> {
        self.config.validate()?;
        let lanes = LaneSet::from_counts(self.counts)?;
        LaneScheduler::from_lanes(lanes, self.config)
    }
}
