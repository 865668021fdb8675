use clap::Parser;
use fcompare::commands::compare;
use fcompare::Tuning;
use std::path::PathBuf;

/// Tuning-enabled variant of fcompare for performance measurement.
///
/// Identical output contract to `fcompare`; the three trailing integers
/// size the engine's hash tables and affect only wall-clock time.
#[derive(Parser)]
#[command(name = "fcompare_test", version, about, allow_negative_numbers = true)]
struct Cli {
    /// First input file
    file1: PathBuf,

    /// Second input file
    file2: PathBuf,

    /// Initial slot capacity for the first file's line set (i)
    first_capacity: i64,

    /// Initial slot capacity for the second file's line set (j)
    second_capacity: i64,

    /// Probe depth shared by both sets (k)
    probe_depth: i64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Tuning validation runs before either file is opened
    let tuning = Tuning::from_raw(cli.first_capacity, cli.second_capacity, cli.probe_depth)?;

    compare::run(&cli.file1, &cli.file2, tuning)?;

    Ok(())
}
