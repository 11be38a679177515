//! Per-lane queue state.
//!
//! # Layout
//!
//! Lanes live in a `Vec<Lane>` in snapshot insertion order, so a lane's
//! [`LaneId`] is simply its position.  A side index maps the stable string
//! key back to its `LaneId`.  Insertion order matters: it is the tie-break
//! order when several lanes share the maximum queue length.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap as LaneIndex;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as LaneIndex;

use crate::{CoreError, CoreResult, LaneId};

// ── Lane ──────────────────────────────────────────────────────────────────────

/// One approach to the intersection and the vehicles queued on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lane {
    /// Stable key supplied by the counting process (e.g. `"lane1.jpg"`).
    pub name: String,
    /// Vehicles currently queued.
    pub waiting: u32,
}

// ── LaneSet ───────────────────────────────────────────────────────────────────

/// Insertion-ordered mapping `lane name → waiting`.
///
/// Constructed once from a snapshot and never grows or shrinks afterwards;
/// only [`drain`][Self::drain] mutates it.
#[derive(Clone, Debug)]
pub struct LaneSet {
    lanes:   Vec<Lane>,
    by_name: LaneIndex<String, LaneId>,
}

impl LaneSet {
    /// Build from `(name, count)` pairs, keeping their order.
    ///
    /// Names are trimmed of surrounding whitespace before they are checked
    /// and stored, so `"A"` and `" A "` name the same lane.
    ///
    /// Fails with [`CoreError::InvalidInput`] if `counts` is empty, a name is
    /// blank, or a name appears twice.
    pub fn from_counts<I, S>(counts: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let iter = counts.into_iter();
        let mut lanes = Vec::with_capacity(iter.size_hint().0);
        let mut by_name: LaneIndex<String, LaneId> = LaneIndex::default();

        for (name, waiting) in iter {
            let name: String = name.into();
            let name = name.trim().to_owned();
            if name.is_empty() {
                return Err(CoreError::InvalidInput(format!(
                    "lane #{} has a blank name",
                    lanes.len()
                )));
            }
            let id = LaneId::try_from(lanes.len())
                .map_err(|_| CoreError::InvalidInput("too many lanes".into()))?;
            if by_name.insert(name.clone(), id).is_some() {
                return Err(CoreError::InvalidInput(format!("duplicate lane {name:?}")));
            }
            lanes.push(Lane { name, waiting });
        }

        if lanes.is_empty() {
            return Err(CoreError::InvalidInput("snapshot contains no lanes".into()));
        }

        Ok(Self { lanes, by_name })
    }

    /// Like [`from_counts`][Self::from_counts] but for counts arriving from an
    /// untyped source.  Negative counts and counts above `u32::MAX` are
    /// rejected.
    pub fn from_signed_counts<I, S>(counts: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let checked = counts
            .into_iter()
            .map(|(name, count)| {
                let name: String = name.into();
                match u32::try_from(count) {
                    Ok(c) => Ok((name, c)),
                    Err(_) => Err(CoreError::InvalidInput(format!(
                        "lane {name:?}: count {count} is not a non-negative 32-bit integer"
                    ))),
                }
            })
            .collect::<CoreResult<Vec<_>>>()?;
        Self::from_counts(checked)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// `true` if the set holds no lanes.  A set built by `from_counts` always
    /// holds at least one.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn get(&self, id: LaneId) -> Option<&Lane> {
        self.lanes.get(id.index())
    }

    /// Name of lane `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this set.
    pub fn name(&self, id: LaneId) -> &str {
        &self.lanes[id.index()].name
    }

    /// Waiting count of lane `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this set.
    pub fn waiting(&self, id: LaneId) -> u32 {
        self.lanes[id.index()].waiting
    }

    pub fn id_of(&self, name: &str) -> Option<LaneId> {
        self.by_name.get(name).copied()
    }

    /// Lanes with their ids, in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (LaneId, &Lane)> + '_ {
        self.lanes
            .iter()
            .enumerate()
            .map(|(i, lane)| (LaneId(i as u32), lane))
    }

    /// Sum of all waiting counts.
    pub fn total_waiting(&self) -> u64 {
        self.lanes.iter().map(|l| l.waiting as u64).sum()
    }

    /// `true` in the terminal state: every lane is empty.
    pub fn all_clear(&self) -> bool {
        self.lanes.iter().all(|l| l.waiting == 0)
    }

    /// The lane holding the most waiting vehicles, or `None` if all are empty.
    ///
    /// Ties resolve to the earliest-inserted lane.  `Iterator::max_by_key`
    /// keeps the *last* maximum, so this is an explicit strict-`>` scan.
    pub fn select_next(&self) -> Option<LaneId> {
        let mut best: Option<(usize, u32)> = None;
        for (i, lane) in self.lanes.iter().enumerate() {
            if lane.waiting == 0 {
                continue;
            }
            match best {
                Some((_, w)) if lane.waiting <= w => {}
                _ => best = Some((i, lane.waiting)),
            }
        }
        best.map(|(i, _)| LaneId(i as u32))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Let up to `max` vehicles leave lane `id`; returns how many left.
    ///
    /// # Panics
    /// Panics if `id` did not come from this set.
    pub fn drain(&mut self, id: LaneId, max: u32) -> u32 {
        let lane = &mut self.lanes[id.index()];
        let passed = max.min(lane.waiting);
        lane.waiting -= passed;
        passed
    }
}
