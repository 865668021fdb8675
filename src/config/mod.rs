//! Tuning configuration for the comparison engine

use crate::types::FcompareError;

/// Default initial slot capacity for either line set
pub const DEFAULT_CAPACITY: usize = 1 << 20;

/// Default chain depth tolerated before a table grows
pub const DEFAULT_PROBE_DEPTH: usize = 8;

/// Hash-table tuning for one comparison run.
///
/// The three knobs map onto the benchmark CLI's `<i> <j> <k>` arguments:
/// initial capacity for the first file's set, initial capacity for the
/// second file's set, and the probe-depth policy shared by both. They steer
/// how often the tables resize and therefore wall-clock time; they can
/// never change which lines are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    /// Initial slot capacity for the first file's line set
    pub first_capacity: usize,

    /// Initial slot capacity for the second file's line set
    pub second_capacity: usize,

    /// Maximum chain depth before either table must grow
    pub probe_depth: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            first_capacity: DEFAULT_CAPACITY,
            second_capacity: DEFAULT_CAPACITY,
            probe_depth: DEFAULT_PROBE_DEPTH,
        }
    }
}

impl Tuning {
    /// Build a tuning from raw CLI integers, rejecting anything non-positive.
    ///
    /// Runs before any file is opened so a bad configuration never touches
    /// the filesystem.
    pub fn from_raw(i: i64, j: i64, k: i64) -> Result<Self, FcompareError> {
        let tuning = Self {
            first_capacity: positive(i, "first-capacity (i)")?,
            second_capacity: positive(j, "second-capacity (j)")?,
            probe_depth: positive(k, "probe-depth (k)")?,
        };
        tuning.validate()?;
        Ok(tuning)
    }

    /// Validate that every knob is usable
    pub fn validate(&self) -> Result<(), FcompareError> {
        if self.first_capacity == 0 || self.second_capacity == 0 {
            return Err(FcompareError::Config(
                "initial capacity must be at least 1".to_string(),
            ));
        }
        if self.probe_depth == 0 {
            return Err(FcompareError::Config(
                "probe depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn positive(value: i64, name: &str) -> Result<usize, FcompareError> {
    if value < 1 {
        return Err(FcompareError::Config(format!(
            "{} must be a positive integer, got {}",
            name, value
        )));
    }
    Ok(value as usize)
}
