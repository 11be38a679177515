//! `sig-sched` — the greedy lane scheduler for the smart_signal framework.
//!
//! # Cycle loop
//!
//! ```text
//! loop:
//!   ① Select  — lane with the most waiting vehicles; ties go to the
//!               earliest-inserted lane.  No candidate → terminal, stop.
//!   ② Green   — grant the fixed green duration.
//!   ③ Drain   — passed = min(throughput, waiting); waiting -= passed.
//!   ④ Emit    — yield a `Cycle` record; cycle_number += 1.
//! ```
//!
//! Every emitted cycle removes at least one vehicle, so the loop ends after at
//! most `sum(initial_counts)` cycles.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sig_core::SignalConfig;
//! use sig_sched::LaneScheduler;
//!
//! let mut sched = LaneScheduler::new([("A", 12), ("B", 7), ("C", 0)], SignalConfig::default())?;
//! for cycle in sched.run_to_completion() {
//!     println!("{cycle:?}");
//! }
//! ```

pub mod builder;
pub mod cycle;
pub mod error;
pub mod loader;
pub mod observer;
pub mod scheduler;


pub use builder::SchedulerBuilder;
pub use cycle::{Cycle, ScheduleSummary};
pub use error::{SchedError, SchedResult};
pub use loader::{load_counts_csv, load_counts_reader};
pub use observer::{NoopObserver, ScheduleObserver};
pub use scheduler::{Cycles, LaneScheduler, ScheduleState};
