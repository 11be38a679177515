//! corridor — many independent intersections scheduled in parallel.
//!
//! Each intersection gets its own synthetic count snapshot and its own
//! `LaneScheduler`.  Schedulers are moved into Rayon tasks one-to-one; no
//! scheduler state is shared between tasks.
//!
//! Run with:
//!   cargo run -p corridor --release -- --intersections 1000 --lanes 6

use std::time::Instant;

use anyhow::Result;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use structopt::StructOpt;

use sig_core::SignalConfig;
use sig_sched::{LaneScheduler, NoopObserver, ScheduleSummary};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(StructOpt, Debug)]
#[structopt(name = "corridor")]
struct Opt {
    #[structopt(long, default_value = "16")]
    intersections: usize,

    /// Lanes per intersection.
    #[structopt(long, default_value = "4")]
    lanes: usize,

    #[structopt(long, default_value = "40")]
    max_vehicles: u32,

    /// Master seed; intersection `i` uses `seed + i`.
    #[structopt(long, default_value = "42")]
    seed: u64,

    #[structopt(long, default_value = "30")]
    green_secs: u32,

    #[structopt(long, default_value = "10")]
    throughput: u32,

    /// Worker threads.  Omit to use all logical cores.
    #[structopt(long)]
    threads: Option<usize>,

    /// Print at most this many per-intersection rows.
    #[structopt(long, default_value = "20")]
    show: usize,
}

// ── Per-intersection result ───────────────────────────────────────────────────

struct IntersectionResult {
    index:        usize,
    initial:      u64,
    busiest_lane: String,
    summary:      ScheduleSummary,
}

fn build_intersection(index: usize, opt: &Opt, config: SignalConfig) -> Result<LaneScheduler> {
    let mut rng = SmallRng::seed_from_u64(opt.seed.wrapping_add(index as u64));
    let counts = (1..=opt.lanes)
        .map(|lane| (format!("i{index}-lane{lane}"), rng.gen_range(0..=opt.max_vehicles)));
    Ok(LaneScheduler::new(counts, config)?)
}

fn run_intersection(index: usize, mut sched: LaneScheduler) -> IntersectionResult {
    let initial = sched.lanes().total_waiting();
    let busiest_lane = sched
        .peek_next()
        .map(|id| sched.lanes().name(id).to_owned())
        .unwrap_or_else(|| "-".into());
    let summary = sched.run(&mut NoopObserver);
    IntersectionResult { index, initial, busiest_lane, summary }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    pretty_env_logger::init();
    let opt = Opt::from_args();

    if let Some(n) = opt.threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
    }

    let config = SignalConfig::new(opt.green_secs, opt.throughput);
    println!("=== corridor — independent greedy schedulers ===");
    println!(
        "Intersections: {}  |  Lanes each: {}  |  Threads: {}",
        opt.intersections,
        opt.lanes,
        rayon::current_num_threads()
    );
    println!();

    // 1. Build every scheduler up front so invalid input fails before any run.
    let schedulers: Vec<LaneScheduler> = (0..opt.intersections)
        .map(|i| build_intersection(i, &opt, config))
        .collect::<Result<_>>()?;

    // 2. One task per intersection; each owns its scheduler outright.
    let t0 = Instant::now();
    let results: Vec<IntersectionResult> = schedulers
        .into_par_iter()
        .enumerate()
        .map(|(i, sched)| run_intersection(i, sched))
        .collect();
    let elapsed = t0.elapsed();
    info!("ran {} intersections in {:.3} s", results.len(), elapsed.as_secs_f64());

    // 3. Report.
    println!(
        "{:<8} {:>9} {:>8} {:>10} {:<20}",
        "Inter.", "Vehicles", "Cycles", "Green (s)", "First green"
    );
    println!("{}", "-".repeat(60));
    for r in results.iter().take(opt.show) {
        println!(
            "{:<8} {:>9} {:>8} {:>10} {:<20}",
            r.index, r.initial, r.summary.cycles, r.summary.elapsed_secs, r.busiest_lane
        );
    }
    if results.len() > opt.show {
        println!("... {} more", results.len() - opt.show);
    }

    let cycles: u64 = results.iter().map(|r| r.summary.cycles).sum();
    let served: u64 = results.iter().map(|r| r.summary.vehicles_served).sum();
    let initial: u64 = results.iter().map(|r| r.initial).sum();
    println!();
    println!(
        "Total: {} cycles, {} / {} vehicles served in {:.3} s wall time",
        cycles,
        served,
        initial,
        elapsed.as_secs_f64()
    );

    Ok(())
}
