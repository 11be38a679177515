//! Signal timing configuration.

use crate::{CoreError, CoreResult};

/// Fixed timing constants for one intersection.
///
/// Both values are constant for the whole run: the green phase does not
/// stretch with queue length, and throughput does not depend on duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalConfig {
    /// Length of every green phase in seconds.  Default: 30.
    pub green_duration_secs: u32,

    /// Vehicles serviced per green phase.  Must be at least 1.  Default: 10.
    pub throughput_per_cycle: u32,
}

impl SignalConfig {
    pub const DEFAULT_GREEN_DURATION_SECS: u32 = 30;
    pub const DEFAULT_THROUGHPUT_PER_CYCLE: u32 = 10;

    pub fn new(green_duration_secs: u32, throughput_per_cycle: u32) -> Self {
        Self { green_duration_secs, throughput_per_cycle }
    }

    /// Reject configurations under which a non-empty lane never drains.
    pub fn validate(&self) -> CoreResult<()> {
        if self.throughput_per_cycle == 0 {
            return Err(CoreError::InvalidInput(
                "throughput_per_cycle must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            green_duration_secs:  Self::DEFAULT_GREEN_DURATION_SECS,
            throughput_per_cycle: Self::DEFAULT_THROUGHPUT_PER_CYCLE,
        }
    }
}
