//! intersection — run the greedy signal scheduler over one vehicle-count
//! snapshot and print a cycle-by-cycle report.
//!
//! Counts come from a `lane_id,vehicles` CSV produced by an external counter,
//! or from a seeded synthetic generator when no file is given.
//!
//! Run with:
//!   cargo run -p intersection -- --counts demos/intersection/data/counts.csv --output output/intersection
//!   RUST_LOG=debug cargo run -p intersection -- --lanes 6 --seed 7

mod report;
mod synthetic;

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use structopt::StructOpt;

use sig_core::{LaneSet, SignalConfig};
use sig_output::{CsvWriter, ScheduleOutputObserver};
use sig_sched::{Cycle, LaneScheduler, ScheduleObserver, ScheduleSummary, load_counts_csv};

use report::ConsoleReport;
use synthetic::synthetic_counts;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(StructOpt, Debug)]
#[structopt(name = "intersection")]
struct Opt {
    /// `lane_id,vehicles` CSV from the vehicle counter.
    #[structopt(short, long, parse(from_os_str))]
    counts: Option<PathBuf>,

    /// Synthetic lane count (ignored with --counts).
    #[structopt(long, default_value = "4")]
    lanes: usize,

    /// Upper bound on synthetic vehicles per lane.
    #[structopt(long, default_value = "30")]
    max_vehicles: u32,

    /// Seed for synthetic counts.
    #[structopt(long, default_value = "42")]
    seed: u64,

    /// Green phase length in seconds.
    #[structopt(long, default_value = "30")]
    green_secs: u32,

    /// Vehicles serviced per green phase.
    #[structopt(long, default_value = "10")]
    throughput: u32,

    /// Directory for `cycles.csv` and `lane_states.csv`.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Print the effective signal config as JSON and exit.
    #[structopt(long)]
    print_config: bool,
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every hook to the console report and, if enabled, the CSV writer.
struct Observers<'a> {
    console: ConsoleReport,
    csv:     Option<&'a mut ScheduleOutputObserver<CsvWriter>>,
}

impl ScheduleObserver for Observers<'_> {
    fn on_schedule_start(&mut self, lanes: &LaneSet) {
        self.console.on_schedule_start(lanes);
        if let Some(csv) = self.csv.as_deref_mut() {
            csv.on_schedule_start(lanes);
        }
    }

    fn on_cycle(&mut self, cycle: &Cycle, lanes: &LaneSet) {
        self.console.on_cycle(cycle, lanes);
        if let Some(csv) = self.csv.as_deref_mut() {
            csv.on_cycle(cycle, lanes);
        }
    }

    fn on_schedule_end(&mut self, summary: &ScheduleSummary) {
        self.console.on_schedule_end(summary);
        if let Some(csv) = self.csv.as_deref_mut() {
            csv.on_schedule_end(summary);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    pretty_env_logger::init();
    let opt = Opt::from_args();

    let config = SignalConfig::new(opt.green_secs, opt.throughput);
    if opt.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    // 1. Obtain the vehicle-count snapshot.
    let counts = match &opt.counts {
        Some(path) => load_counts_csv(path)
            .with_context(|| format!("loading counts from {}", path.display()))?,
        None => {
            info!("no --counts given; generating {} synthetic lanes (seed {})", opt.lanes, opt.seed);
            synthetic_counts(opt.lanes, opt.max_vehicles, opt.seed)
        }
    };

    println!("=== intersection — greedy signal scheduler ===");
    println!(
        "Lanes: {}  |  Green: {} s  |  Throughput: {} vehicles/cycle",
        counts.len(),
        config.green_duration_secs,
        config.throughput_per_cycle
    );
    println!();

    // 2. Build the scheduler.
    let mut sched = LaneScheduler::new(counts, config)?;

    // 3. Set up optional CSV output.
    let mut csv_obs = match &opt.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output dir {}", dir.display()))?;
            Some(ScheduleOutputObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };

    // 4. Run.
    let mut obs = Observers { console: ConsoleReport, csv: csv_obs.as_mut() };
    sched.run(&mut obs);

    if let Some(e) = csv_obs.as_mut().and_then(|o| o.take_error()) {
        eprintln!("output error: {e}");
    }
    if let Some(dir) = &opt.output {
        println!("CSV written to {}", dir.display());
    }

    Ok(())
}
