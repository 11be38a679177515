//! Human-readable per-cycle console report.

use sig_core::LaneSet;
use sig_sched::{Cycle, ScheduleObserver, ScheduleSummary};

/// Prints each green phase, the traffic state after it, and the lane that
/// will go green next.
pub struct ConsoleReport;

impl ScheduleObserver for ConsoleReport {
    fn on_schedule_start(&mut self, lanes: &LaneSet) {
        println!("Initial snapshot:");
        print_state(lanes);
    }

    fn on_cycle(&mut self, cycle: &Cycle, lanes: &LaneSet) {
        println!();
        println!("================ Cycle {} ================", cycle.cycle_number);
        println!("GREEN light   -> {}", lanes.name(cycle.selected_lane));
        println!("Duration      :  {} s (t = {} s)", cycle.green_duration, cycle.started_at_secs);
        println!("Cars before   :  {}", cycle.waiting_before);
        println!(
            "Cars passed   :  {} in {} s",
            cycle.vehicles_passed, cycle.green_duration
        );
        println!("Cars remaining:  {}", cycle.waiting_after);
        println!();
        println!("Current traffic state:");
        print_state(lanes);

        println!();
        println!("{}", next_lane_line(lanes));
    }

    fn on_schedule_end(&mut self, summary: &ScheduleSummary) {
        println!();
        println!(
            "Simulation complete: {} cycles, {} vehicles served, {} s of green time",
            summary.cycles, summary.vehicles_served, summary.elapsed_secs
        );
    }
}

/// Prediction line printed after each cycle's traffic state.
fn next_lane_line(lanes: &LaneSet) -> String {
    match lanes.select_next() {
        Some(next) => format!("Next lane to be GREEN: {}", lanes.name(next)),
        None => "All lanes are clear. Traffic flow complete.".to_owned(),
    }
}

fn print_state(lanes: &LaneSet) {
    for (_, lane) in lanes.iter() {
        println!("   {:<20} {:>5} cars waiting", lane.name, lane.waiting);
    }
}
