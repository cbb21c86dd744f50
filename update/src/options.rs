//! Execution options.

/// Options for executing a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Merge text siblings that became neighbours.
    pub merge_adjacent_text: bool,
    /// Toggle the table's bulk write hint around the apply phase.
    pub bulk_write_hint: bool,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            merge_adjacent_text: false,
            bulk_write_hint: true,
        }
    }
}

impl ExecuteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merge_adjacent_text(mut self, merge: bool) -> Self {
        self.merge_adjacent_text = merge;
        self
    }

    pub fn with_bulk_write_hint(mut self, hint: bool) -> Self {
        self.bulk_write_hint = hint;
        self
    }
}
