//! planner — rank weekly class schedules from a course catalog.
//!
//! Loads a CSV catalog (or the embedded sample), applies the weights and
//! limits from an optional JSON config, enumerates every combination of one
//! group per course, and prints the best-scoring conflict-free timetables.
//!
//! ```text
//! planner --courses catalog.csv --config planner.json --top-k 3
//! planner --json > ranked.json
//! ```
//!
//! Ctrl-C stops the search at its next checkpoint and prints what was found
//! so far.

mod config;
mod logger;

#[cfg(test)]
mod tests;

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use tt_catalog::{load_catalog_csv, load_catalog_reader};
use tt_core::Course;
use tt_engine::{
    CancelToken, EngineBuilder, EnumerationObserver, RankedResult, ScheduleRequest,
    ScheduleResponse, SearchStats,
};

use config::PlannerConfig;

// ── Embedded sample ───────────────────────────────────────────────────────────

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.csv");

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "planner", version, about = "Rank conflict-free weekly class schedules")]
struct Args {
    /// Course catalog CSV.  Uses the embedded sample when omitted.
    #[arg(short, long)]
    courses: Option<PathBuf>,

    /// JSON file with `weights` and `limits`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override `limits.top_k`.
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Override `limits.max_combinations`.
    #[arg(long)]
    max_combinations: Option<u64>,

    /// Print the full response as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace).  Falls back to RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressLogger {
    started: Instant,
}

impl EnumerationObserver for ProgressLogger {
    fn on_start(&mut self, total: u64, large_search_space: bool) {
        self.started = Instant::now();
        if large_search_space {
            log::warn!("large search space: {total} combinations");
        }
    }

    fn on_progress(&mut self, enumerated: u64, total: u64) {
        let pct = if total == 0 { 100.0 } else { enumerated as f64 * 100.0 / total as f64 };
        log::info!("{enumerated}/{total} combinations ({pct:.1}%)");
    }

    fn on_finish(&mut self, stats: &SearchStats) {
        log::info!(
            "finished in {:.3} s: {} enumerated, {} valid",
            self.started.elapsed().as_secs_f64(),
            stats.enumerated,
            stats.valid
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.log_level.as_deref())?;

    // 1. Configuration.
    let mut config = match &args.config {
        Some(path) => PlannerConfig::from_file(path)?,
        None => PlannerConfig::default(),
    };
    if let Some(k) = args.top_k {
        config.limits.top_k = k;
    }
    if let Some(max) = args.max_combinations {
        config.limits.max_combinations = max;
    }

    // 2. Catalog.
    let courses = match &args.courses {
        Some(path) => load_catalog_csv(path)?,
        None => {
            log::info!("no catalog given, using the embedded sample");
            load_catalog_reader(Cursor::new(SAMPLE_CATALOG))?
        }
    };

    // 3. Cancellation on Ctrl-C.
    let cancel = CancelToken::new();
    ctrlc::set_handler({
        let cancel = cancel.clone();
        move || cancel.cancel()
    })?;

    // 4. Build and run.
    let request = ScheduleRequest::new(courses, config.weights).with_limits(config.limits);
    let engine = EngineBuilder::new(request).cancel_token(cancel).build()?;
    let mut observer = ProgressLogger { started: Instant::now() };
    let response = engine.run(&mut observer);

    // 5. Report.
    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_report(engine.courses(), &response);
    }

    Ok(())
}

// ── Text report ───────────────────────────────────────────────────────────────

/// Contact hours per week of the courses actually taken.
fn weekly_hours(result: &RankedResult) -> f64 {
    result.taken().map(|e| e.weekly_minutes()).sum::<u32>() as f64 / 60.0
}

fn print_report(courses: &[Course], response: &ScheduleResponse) {
    let stats = &response.stats;
    println!(
        "Combinations: {} total, {} enumerated, {} valid",
        stats.total_combinations, stats.enumerated, stats.valid
    );
    if response.large_search_space_warning {
        println!("Warning: large search space");
    }
    if response.truncated {
        println!(
            "Search truncated{}; ranking covers a prefix of the enumeration",
            if stats.cancelled { " by cancellation" } else { " at the combination cap" }
        );
    }
    for id in &response.dropped_courses {
        println!("Dropped optional course {id}: no options");
    }
    println!();

    if response.results.is_empty() {
        println!("No conflict-free schedule found.");
        return;
    }

    for (rank, result) in response.results.iter().enumerate() {
        println!(
            "#{:<3} score {:>10.2}   {:.1} h/week   (combination {})",
            rank + 1,
            result.score,
            weekly_hours(result),
            result.discovery_index
        );
        println!("     {:<28} {:<6} {:<24} {}", "Course", "Group", "Instructor", "Meetings");
        println!("     {}", "-".repeat(80));
        for (entry, course) in result.combination.iter().zip(courses) {
            if entry.is_placeholder {
                println!("     {:<28} {:<6}", course.name, "skip");
                continue;
            }
            let meetings: Vec<String> = entry.intervals.iter().map(ToString::to_string).collect();
            println!(
                "     {:<28} {:<6} {:<24} {}",
                course.name,
                entry.label,
                entry.instructor,
                meetings.join(", ")
            );
        }
        println!();
    }
}
