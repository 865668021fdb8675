//! Main compare command

use crate::config::Tuning;
use crate::diff::DiffEngine;
use crate::types::{DiffSummary, FcompareError};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Run one comparison, printing differing lines to stdout.
///
/// The shared entry point for both the default and the tuning-enabled
/// binary; they differ only in how the [`Tuning`] is obtained. Stdout is
/// locked and buffered for the whole run so multi-million-line diffs are
/// not write-call bound.
pub fn run(first: &Path, second: &Path, tuning: Tuning) -> Result<DiffSummary, FcompareError> {
    tuning.validate()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let summary = DiffEngine::new(tuning).run(first, second, &mut out)?;
    out.flush()?;

    Ok(summary)
}

/// Run one comparison into an arbitrary writer.
///
/// Used by the sweep binary (which discards the diff) and by tests that
/// capture output.
pub fn run_to<W: Write>(
    first: &Path,
    second: &Path,
    tuning: Tuning,
    out: &mut W,
) -> Result<DiffSummary, FcompareError> {
    tuning.validate()?;
    DiffEngine::new(tuning).run(first, second, out)
}
