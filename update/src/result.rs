//! Execution outcome.

/// Counts reported by a batch execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteOutcome {
    /// Structural updates applied (deletes, inserts, replaces).
    pub structural: usize,
    /// Value updates applied (renames, value updates).
    pub value: usize,
    /// Updates dropped because their target was removed anyway.
    pub elided: usize,
    /// Delete/insert pairs folded into a replace.
    pub merged: usize,
    /// DIST values rewritten.
    pub dist_writes: usize,
    /// Adjacent text pairs merged.
    pub text_merges: usize,
}

impl ExecuteOutcome {
    /// Total number of table primitives issued for the batch itself.
    pub fn applied(&self) -> usize {
        self.structural + self.value
    }

    pub fn with_elided(mut self, elided: usize) -> Self {
        self.elided = elided;
        self
    }

    pub fn with_merged(mut self, merged: usize) -> Self {
        self.merged = merged;
        self
    }
}
