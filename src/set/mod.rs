//! Capacity-tunable hash set of line content

use crate::config::Tuning;
use crate::hash::line_hash;
use crate::types::Line;

/// Hard ceiling on slot count so pathological tunings (tiny probe depth,
/// colliding hashes) terminate instead of doubling forever
const MAX_CAPACITY: usize = 1 << 30;

/// A hash set of distinct lines with externally tunable table sizing.
///
/// Two knobs parameterize the table: an initial slot capacity and a maximum
/// chain depth. Insertion slots a line at `hash % capacity` and chains
/// collisions inside the slot; when a chain would exceed the probe depth the
/// table transparently doubles and redistributes. Both knobs affect only how
/// often the table grows - membership semantics are identical for every
/// valid tuning.
///
/// Stored lines live in an insertion-order arena and slots hold arena
/// indices, so growth moves indices only (lines are never copied, lost, or
/// duplicated) and iteration yields first-occurrence order.
pub struct LineSet {
    /// Distinct lines in first-occurrence order
    lines: Vec<Line>,
    /// Content hash per stored line, parallel to `lines`
    hashes: Vec<u64>,
    /// Chained slots holding indices into `lines`
    slots: Vec<Vec<u32>>,
    /// Chain depth tolerated before the table doubles
    probe_depth: usize,
    /// Growth events since construction
    grow_events: u64,
}

impl LineSet {
    /// Create an empty set with an explicit initial capacity and probe depth.
    ///
    /// `initial_capacity` is advisory: a good guess skips growth entirely,
    /// a bad one only costs resize passes.
    pub fn with_tuning(initial_capacity: usize, probe_depth: usize) -> Self {
        Self {
            lines: Vec::new(),
            hashes: Vec::new(),
            slots: vec![Vec::new(); initial_capacity.max(1)],
            probe_depth: probe_depth.max(1),
            grow_events: 0,
        }
    }

    /// Create an empty set sized for the first file of a tuning
    pub fn for_first_file(tuning: &Tuning) -> Self {
        Self::with_tuning(tuning.first_capacity, tuning.probe_depth)
    }

    /// Create an empty set sized for the second file of a tuning
    pub fn for_second_file(tuning: &Tuning) -> Self {
        Self::with_tuning(tuning.second_capacity, tuning.probe_depth)
    }

    /// Insert a line, collapsing duplicates.
    ///
    /// Returns `true` when the line was new, `false` when an equal line was
    /// already stored.
    pub fn insert(&mut self, line: Line) -> bool {
        let hash = line_hash(line.as_bytes());
        if self.find(hash, line.as_bytes()).is_some() {
            return false;
        }

        let index = self.lines.len() as u32;
        self.lines.push(line);
        self.hashes.push(hash);

        let mut slot = (hash % self.slots.len() as u64) as usize;
        while self.slots[slot].len() >= self.probe_depth && self.slots.len() < MAX_CAPACITY {
            self.grow();
            slot = (hash % self.slots.len() as u64) as usize;
        }
        self.slots[slot].push(index);
        true
    }

    /// Test membership of raw line content.
    ///
    /// Expected O(1): one hash, one slot, a chain walk that compares full
    /// content only on a 64-bit hash match.
    pub fn contains(&self, bytes: &[u8]) -> bool {
        self.find(line_hash(bytes), bytes).is_some()
    }

    /// Number of distinct lines stored
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when no lines are stored (e.g. built from an empty file)
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current slot capacity
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Growth events since construction
    pub fn grow_events(&self) -> u64 {
        self.grow_events
    }

    /// Iterate stored lines in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    fn find(&self, hash: u64, bytes: &[u8]) -> Option<u32> {
        let slot = (hash % self.slots.len() as u64) as usize;
        self.slots[slot]
            .iter()
            .copied()
            .find(|&i| self.hashes[i as usize] == hash && self.lines[i as usize].as_bytes() == bytes)
    }

    /// Double the slot count and redistribute every stored index
    fn grow(&mut self) {
        let new_capacity = (self.slots.len() * 2).min(MAX_CAPACITY);
        let mut slots = vec![Vec::new(); new_capacity];

        for (index, &hash) in self.hashes.iter().enumerate() {
            let slot = (hash % new_capacity as u64) as usize;
            slots[slot].push(index as u32);
        }

        self.slots = slots;
        self.grow_events += 1;
    }
}
