//! Sweep the (i, j, k) tuning space over a fixed pair of input files and
//! report the fastest configuration.
//!
//! Runs the engine in-process with the diff output discarded, so timings
//! measure ingestion, hashing, and table behavior rather than terminal I/O.

use fcompare::commands::compare;
use fcompare::Tuning;
use std::env;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const MIN_CAPACITY: usize = 100_000;
const MAX_CAPACITY: usize = 10_000_000;
const MAX_PROBE_DEPTH: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let (file1, file2) = match (args.next(), args.next()) {
        (Some(a), Some(b)) => (PathBuf::from(a), PathBuf::from(b)),
        _ => {
            eprintln!("Usage: cargo run --release --bin tune_sweep -- <file1> <file2>");
            std::process::exit(2);
        }
    };

    println!(
        "Sweeping {} x {} x {} configurations on {} vs {}",
        capacity_steps().count(),
        capacity_steps().count(),
        MAX_PROBE_DEPTH,
        file1.display(),
        file2.display()
    );

    // Warm the page cache once so the first measured run is not penalized.
    compare::run_to(&file1, &file2, Tuning::default(), &mut io::sink())?;

    let mut measured: Vec<(Tuning, Duration)> = Vec::new();
    for tuning in configurations() {
        let start = Instant::now();
        let summary = compare::run_to(&file1, &file2, tuning, &mut io::sink())?;
        let elapsed = start.elapsed();

        println!(
            "i={:>9} j={:>9} k={}  {:>9.3} ms  (grows={}, diff={})",
            tuning.first_capacity,
            tuning.second_capacity,
            tuning.probe_depth,
            elapsed.as_secs_f64() * 1000.0,
            summary.grow_events,
            summary.emitted
        );
        measured.push((tuning, elapsed));
    }

    // Fold to the minimum; an empty sweep has no best configuration rather
    // than an uninitialized one.
    match measured.into_iter().min_by_key(|(_, elapsed)| *elapsed) {
        Some((best, elapsed)) => {
            println!("\nSummary");
            println!("  best time   : {:>9.3} ms", elapsed.as_secs_f64() * 1000.0);
            println!(
                "  best tuning : i={} j={} k={}",
                best.first_capacity, best.second_capacity, best.probe_depth
            );
        }
        None => println!("\nno configurations measured"),
    }

    Ok(())
}

/// Geometric capacity ladder: 100K, 1M, 10M
fn capacity_steps() -> impl Iterator<Item = usize> + Clone {
    std::iter::successors(Some(MIN_CAPACITY), |&c| {
        (c < MAX_CAPACITY).then_some(c * 10)
    })
}

/// Every (i, j, k) combination in sweep order
fn configurations() -> impl Iterator<Item = Tuning> {
    capacity_steps().flat_map(|i| {
        capacity_steps().flat_map(move |j| {
            (1..=MAX_PROBE_DEPTH).map(move |k| Tuning {
                first_capacity: i,
                second_capacity: j,
                probe_depth: k,
            })
        })
    })
}
