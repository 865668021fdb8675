//! Comparison engine

use crate::config::Tuning;
use crate::diff::DiffWriter;
use crate::reader::LineReader;
use crate::set::LineSet;
use crate::types::{DiffSummary, FcompareError, Line};
use std::io::Write;
use std::path::Path;

/// Phases of one comparison run, in execution order.
///
/// No transition is skipped; `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Init,
    BuildFirst,
    BuildSecond,
    ScanFirstAgainstSecond,
    ScanSecondAgainstFirst,
    Done,
}

/// Computes the symmetric line difference of two files.
///
/// Builds one [`LineSet`] per file (capacities seeded from the tuning's
/// `i` and `j`, probe depth from `k`), then scans each set's distinct lines
/// in first-occurrence order and emits those absent from the other set.
/// Lines present in both files produce no output; duplicates within one file
/// were already collapsed at build time, so each differing line is emitted
/// exactly once.
///
/// An engine performs one comparison. Calling [`run`](DiffEngine::run) a
/// second time fails with a validation error.
pub struct DiffEngine {
    tuning: Tuning,
    state: EngineState,
}

impl DiffEngine {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            state: EngineState::Init,
        }
    }

    /// Current phase (terminal `Done` after a completed run)
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Run the comparison, writing differing lines to `out`.
    ///
    /// # Arguments
    /// * `first` - Path of the first input file
    /// * `second` - Path of the second input file
    /// * `out` - Destination for the diff lines, typically buffered stdout
    ///
    /// # Errors
    /// * `FcompareError::Validation` when the engine has already run
    /// * `FcompareError::FileAccess` when either file cannot be opened
    /// * `FcompareError::Io` on read or write failures
    pub fn run<W: Write>(
        &mut self,
        first: &Path,
        second: &Path,
        out: &mut W,
    ) -> Result<DiffSummary, FcompareError> {
        if self.state != EngineState::Init {
            return Err(FcompareError::Validation(
                "comparison engine is single-use; create a new engine per run".to_string(),
            ));
        }

        let mut summary = DiffSummary::default();

        self.state = EngineState::BuildFirst;
        let set_a = build_set(
            first,
            LineSet::for_first_file(&self.tuning),
            &mut summary.first_lines_read,
        )?;
        summary.first_distinct = set_a.len() as u64;

        self.state = EngineState::BuildSecond;
        let set_b = build_set(
            second,
            LineSet::for_second_file(&self.tuning),
            &mut summary.second_lines_read,
        )?;
        summary.second_distinct = set_b.len() as u64;
        summary.grow_events = set_a.grow_events() + set_b.grow_events();

        let mut writer = DiffWriter::new(out);

        self.state = EngineState::ScanFirstAgainstSecond;
        emit_unique(&set_a, &set_b, &mut writer)?;

        self.state = EngineState::ScanSecondAgainstFirst;
        emit_unique(&set_b, &set_a, &mut writer)?;

        summary.emitted = writer.emitted();
        self.state = EngineState::Done;
        Ok(summary)
    }
}

/// Stream a file's lines into a set, counting records read
fn build_set(
    path: &Path,
    mut set: LineSet,
    lines_read: &mut u64,
) -> Result<LineSet, FcompareError> {
    for line in LineReader::open(path)? {
        set.insert(Line::from(line?));
        *lines_read += 1;
    }
    Ok(set)
}

/// Emit every line of `scanned` that is absent from `other`,
/// in first-occurrence order
fn emit_unique<W: Write>(
    scanned: &LineSet,
    other: &LineSet,
    writer: &mut DiffWriter<W>,
) -> Result<(), FcompareError> {
    for line in scanned.iter() {
        if !other.contains(line.as_bytes()) {
            writer.emit(line)?;
        }
    }
    Ok(())
}
