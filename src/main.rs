use clap::Parser;
use fcompare::commands::compare;
use fcompare::Tuning;
use std::path::PathBuf;

/// Print the lines that differ between two text files
#[derive(Parser)]
#[command(name = "fcompare", version, about)]
struct Cli {
    /// First input file
    file1: PathBuf,

    /// Second input file
    file2: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    compare::run(&cli.file1, &cli.file2, Tuning::default())?;

    Ok(())
}
