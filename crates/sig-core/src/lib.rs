//! `sig-core` — foundational types for the `smart_signal` scheduler.
//!
//! This crate is a dependency of every other `sig-*` crate.  It has no
//! `sig-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde` and `rustc-hash`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `LaneId`                                              |
//! | [`lane`]     | `Lane`, `LaneSet` (insertion-ordered queue state)     |
//! | [`config`]   | `SignalConfig` (green duration, throughput)           |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to `LaneId`, `SignalConfig`. |
//! | `fx-hash` | Uses `FxHashMap` for the lane-name → `LaneId` index.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod lane;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SignalConfig;
pub use error::{CoreError, CoreResult};
pub use ids::LaneId;
pub use lane::{Lane, LaneSet};
