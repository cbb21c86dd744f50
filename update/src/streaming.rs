//! Streaming batch: updates arrive in ascending location order.
//!
//! Only the most recent update is held back. Each arrival is validated
//! against it, then either discarded (it only touches rows the held update
//! removes), folded into it, or it pushes the held update into the
//! permanent lists and takes its place.

use strata_core::{DataClip, Pre};
use strata_table::Table;
use tracing::{debug, warn};

use crate::error::UpdateResult;
use crate::executor::BatchExecutor;
use crate::ops;
use crate::options::ExecuteOptions;
use crate::result::ExecuteOutcome;
use crate::update::AtomicUpdate;
use crate::validation::check_sequence;

/// The one-update lookback buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lookback {
    #[default]
    Empty,
    Holding(AtomicUpdate),
}

/// What happened to an admitted update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// The update became the held update.
    Held,
    /// The update touches only rows the held update removes.
    Discarded,
    /// The update was folded into the held update.
    Merged,
    /// The previously held update is final; the new one is held instead.
    Flushed(AtomicUpdate),
}

impl Lookback {
    /// Admit `incoming`, which must follow the held update in document order.
    pub fn admit(self, incoming: AtomicUpdate) -> UpdateResult<(Lookback, Admission)> {
        let pending = match self {
            Lookback::Empty => return Ok((Lookback::Holding(incoming), Admission::Held)),
            Lookback::Holding(pending) => pending,
        };
        check_sequence(&pending, &incoming)?;

        if pending.dooms(&incoming) {
            return Ok((Lookback::Holding(pending), Admission::Discarded));
        }
        match pending.merge(&incoming) {
            Some(merged) => Ok((Lookback::Holding(merged), Admission::Merged)),
            None => Ok((Lookback::Holding(incoming), Admission::Flushed(pending))),
        }
    }

    pub fn pending(&self) -> Option<&AtomicUpdate> {
        match self {
            Lookback::Empty => None,
            Lookback::Holding(update) => Some(update),
        }
    }

    pub fn take(self) -> Option<AtomicUpdate> {
        match self {
            Lookback::Empty => None,
            Lookback::Holding(update) => Some(update),
        }
    }
}

/// A batch bound to one table, filled in ascending location order.
pub struct StreamingBatch<'t, T: Table + ?Sized> {
    table: &'t mut T,
    lookback: Lookback,
    structural: Vec<AtomicUpdate>,
    values: Vec<AtomicUpdate>,
    /// Accumulated shift of the last admitted structural update.
    shift_total: Pre,
    discarded: usize,
    merged: usize,
}

impl<'t, T: Table + ?Sized> StreamingBatch<'t, T> {
    /// Create a new batch for `table`.
    pub fn new(table: &'t mut T) -> Self {
        Self {
            table,
            lookback: Lookback::Empty,
            structural: Vec::new(),
            values: Vec::new(),
            shift_total: 0,
            discarded: 0,
            merged: 0,
        }
    }

    /// The bound table.
    pub fn table(&self) -> &T {
        &*self.table
    }

    pub fn add_delete(&mut self, pre: Pre) -> UpdateResult<()> {
        let update = ops::build_delete(&*self.table, pre)?;
        self.consider(update)
    }

    /// Add an insert; `attribute` selects attribute insertion.
    pub fn add_insert(
        &mut self,
        pre: Pre,
        parent: Pre,
        clip: DataClip,
        attribute: bool,
    ) -> UpdateResult<()> {
        let update = if attribute {
            ops::build_insert_attr(&*self.table, pre, parent, clip)?
        } else {
            ops::build_insert(&*self.table, pre, parent, clip)?
        };
        self.consider(update)
    }

    pub fn add_replace(&mut self, pre: Pre, clip: DataClip) -> UpdateResult<()> {
        let update = ops::build_replace(&*self.table, pre, clip)?;
        self.consider(update)
    }

    pub fn add_rename(&mut self, pre: Pre, name: &[u8], uri: &[u8]) -> UpdateResult<()> {
        let update = ops::build_rename(&*self.table, pre, name, uri)?;
        self.consider(update)
    }

    pub fn add_update_value(&mut self, pre: Pre, value: &[u8]) -> UpdateResult<()> {
        let update = ops::build_update_value(&*self.table, pre, value)?;
        self.consider(update)
    }

    /// Number of collected updates. Flushes the lookback buffer, so the
    /// next update is not compared against the current one.
    pub fn pending_count(&mut self) -> usize {
        self.flush();
        self.structural.len() + self.values.len()
    }

    /// Structural updates collected so far, in admission order.
    pub fn structural(&self) -> &[AtomicUpdate] {
        &self.structural
    }

    /// Value updates collected so far, in admission order.
    pub fn values(&self) -> &[AtomicUpdate] {
        &self.values
    }

    /// Drop all collected updates.
    pub fn clear(&mut self) {
        self.lookback = Lookback::Empty;
        self.structural.clear();
        self.values.clear();
        self.shift_total = 0;
        self.discarded = 0;
        self.merged = 0;
    }

    /// Apply all collected updates, optionally merging adjacent texts.
    pub fn execute(&mut self, merge_adjacent_text: bool) -> UpdateResult<ExecuteOutcome> {
        let options = ExecuteOptions::default().with_merge_adjacent_text(merge_adjacent_text);
        self.execute_with(&options)
    }

    /// Apply all collected updates and reset the batch.
    pub fn execute_with(&mut self, options: &ExecuteOptions) -> UpdateResult<ExecuteOutcome> {
        self.flush();
        let structural = std::mem::take(&mut self.structural);
        let values = std::mem::take(&mut self.values);
        let (elided, merged) = (self.discarded, self.merged);
        self.clear();

        let outcome = BatchExecutor::new(&mut *self.table, *options).run(&values, &structural)?;
        Ok(outcome.with_elided(elided).with_merged(merged))
    }

    fn consider(&mut self, mut update: AtomicUpdate) -> UpdateResult<()> {
        if update.is_structural() {
            update.header.accumulated_shift = self.shift_total + update.shift();
        }
        let structural = update.is_structural();
        let total = update.accumulated_shift();

        let lookback = std::mem::take(&mut self.lookback);
        let (lookback, admission) = match lookback.admit(update) {
            Ok(next) => next,
            Err(err) => {
                warn!(error = %err, "aborting update batch");
                self.clear();
                return Err(err);
            }
        };
        self.lookback = lookback;

        match admission {
            Admission::Discarded => {
                debug!(pending = ?self.lookback.pending().map(|u| u.to_string()), "discarded update");
                self.discarded += 1;
                return Ok(());
            }
            Admission::Merged => {
                debug!(pending = ?self.lookback.pending().map(|u| u.to_string()), "merged update");
                self.merged += 1;
            }
            Admission::Flushed(done) => self.push(done),
            Admission::Held => {}
        }
        if structural {
            self.shift_total = total;
        }
        Ok(())
    }

    fn push(&mut self, update: AtomicUpdate) {
        if update.is_structural() {
            self.structural.push(update);
        } else {
            self.values.push(update);
        }
    }

    fn flush(&mut self) {
        if let Some(update) = std::mem::take(&mut self.lookback).take() {
            self.push(update);
        }
    }
}
