//! Comparison run statistics

/// Counters collected over one comparison run.
///
/// These never appear on stdout; the sweep binary reports them on its own
/// output and tests use them to observe table behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    /// Line records read from the first file (duplicates included)
    pub first_lines_read: u64,

    /// Line records read from the second file (duplicates included)
    pub second_lines_read: u64,

    /// Distinct lines stored for the first file
    pub first_distinct: u64,

    /// Distinct lines stored for the second file
    pub second_distinct: u64,

    /// Hash-table growth events across both sets
    pub grow_events: u64,

    /// Lines written to the output (the size of the symmetric difference)
    pub emitted: u64,
}

impl DiffSummary {
    /// True when the two files held identical line sets
    pub fn is_match(&self) -> bool {
        self.emitted == 0
    }
}
