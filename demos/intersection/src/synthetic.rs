//! Seeded stand-in for the external vehicle counter.
//!
//! Produces one count per lane, named the way the upload step names its
//! images (`lane1.jpg`, `lane2.jpg`, …).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// `lanes` counts drawn uniformly from `0..=max_vehicles`.
pub fn synthetic_counts(lanes: usize, max_vehicles: u32, seed: u64) -> Vec<(String, u32)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (1..=lanes)
        .map(|i| (format!("lane{i}.jpg"), rng.gen_range(0..=max_vehicles)))
        .collect()
}
