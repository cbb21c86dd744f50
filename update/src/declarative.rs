//! Declarative batch: updates arrive already sorted, descending.
//!
//! Nothing is validated while updates are added. `check` validates the
//! whole list in one pass and `optimize` elides and folds in another, both
//! before the table is touched.
//!
//! Within one location the list holds updates in the reverse of the order
//! a streaming batch would admit them, so reading the list from the back
//! always yields document order.

use std::ops::Range;

use strata_core::{DataClip, Pre};
use strata_table::Table;
use tracing::{debug, warn};

use crate::error::UpdateResult;
use crate::executor::{accumulate_shifts, BatchExecutor};
use crate::ops;
use crate::options::ExecuteOptions;
use crate::result::ExecuteOutcome;
use crate::update::{dooms_within, AtomicUpdate};
use crate::validation::check_sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Validate and optimize before applying.
    Checked,
    /// Apply as given. Used for internally generated updates that are
    /// consistent by construction.
    Trusted,
}

/// A batch bound to one table, filled in descending location order.
pub struct DeclarativeBatch<'t, T: Table + ?Sized> {
    table: &'t mut T,
    updates: Vec<AtomicUpdate>,
    mode: Mode,
    elided: usize,
    merged: usize,
}

impl<'t, T: Table + ?Sized> DeclarativeBatch<'t, T> {
    /// Create a new batch for `table`.
    pub fn new(table: &'t mut T) -> Self {
        Self {
            table,
            updates: Vec::new(),
            mode: Mode::Checked,
            elided: 0,
            merged: 0,
        }
    }

    /// Create a batch that applies `updates` without checking or optimizing
    /// them. The updates must be descending and free of conflicts.
    pub fn trusted(table: &'t mut T, updates: Vec<AtomicUpdate>) -> Self {
        Self {
            table,
            updates,
            mode: Mode::Trusted,
            elided: 0,
            merged: 0,
        }
    }

    /// The bound table.
    pub fn table(&self) -> &T {
        &*self.table
    }

    pub fn add_delete(&mut self, pre: Pre) -> UpdateResult<()> {
        let update = ops::build_delete(&*self.table, pre)?;
        self.updates.push(update);
        Ok(())
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
        self.updates.push(update);
        Ok(())
    }

    pub fn add_replace(&mut self, pre: Pre, clip: DataClip) -> UpdateResult<()> {
        let update = ops::build_replace(&*self.table, pre, clip)?;
        self.updates.push(update);
        Ok(())
    }

    pub fn add_rename(&mut self, pre: Pre, name: &[u8], uri: &[u8]) -> UpdateResult<()> {
        let update = ops::build_rename(&*self.table, pre, name, uri)?;
        self.updates.push(update);
        Ok(())
    }

    pub fn add_update_value(&mut self, pre: Pre, value: &[u8]) -> UpdateResult<()> {
        let update = ops::build_update_value(&*self.table, pre, value)?;
        self.updates.push(update);
        Ok(())
    }

    /// Collected updates in list order.
    pub fn updates(&self) -> &[AtomicUpdate] {
        &self.updates
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Drop all collected updates.
    pub fn clear(&mut self) {
        self.updates.clear();
        self.elided = 0;
        self.merged = 0;
    }

    /// Validate the whole list.
    ///
    /// Locations must not increase along the list, and neighbours are
    /// checked with the streaming rules in document order.
    pub fn check(&self) -> UpdateResult<()> {
        for pair in self.updates.windows(2) {
            check_sequence(&pair[1], &pair[0])?;
        }
        Ok(())
    }

    /// Elide updates inside removed subtrees and fold delete/insert pairs
    /// into replaces. Returns the number of elided updates; running it again
    /// changes nothing.
    pub fn optimize(&mut self) -> usize {
        let elided = self.elide();
        let merged = self.fold();
        self.elided += elided;
        self.merged += merged;
        if elided + merged > 0 {
            debug!(elided, merged, "optimized declarative batch");
        }
        elided
    }

    /// Apply all collected updates, optionally merging adjacent texts.
    pub fn execute(&mut self, merge_adjacent_text: bool) -> UpdateResult<ExecuteOutcome> {
        let options = ExecuteOptions::default().with_merge_adjacent_text(merge_adjacent_text);
        self.execute_with(&options)
    }

    /// Check, optimize and apply all collected updates, then reset the batch.
    pub fn execute_with(&mut self, options: &ExecuteOptions) -> UpdateResult<ExecuteOutcome> {
        if self.mode == Mode::Checked {
            if let Err(err) = self.check() {
                warn!(error = %err, "aborting update batch");
                self.clear();
                return Err(err);
            }
            self.optimize();
        }

        let updates = std::mem::take(&mut self.updates);
        let (elided, merged) = (self.elided, self.merged);
        self.clear();

        let (mut ascending, values): (Vec<_>, Vec<_>) =
            updates.into_iter().partition(|u| u.is_structural());
        ascending.reverse();
        accumulate_shifts(&mut ascending);

        let outcome = BatchExecutor::new(&mut *self.table, *options).run(&values, &ascending)?;
        Ok(outcome.with_elided(elided).with_merged(merged))
    }

    /// Sweep in document order, dropping every update the nearest
    /// surviving destructive update dooms.
    fn elide(&mut self) -> usize {
        let mut doomed: Option<Range<Pre>> = None;
        let mut keep = vec![true; self.updates.len()];

        for (index, update) in self.updates.iter().enumerate().rev() {
            if doomed.as_ref().is_some_and(|range| dooms_within(range, update)) {
                keep[index] = false;
                continue;
            }
            if let Some(range) = update.doomed_range() {
                doomed = Some(range);
            }
        }

        let before = self.updates.len();
        let mut flags = keep.into_iter();
        self.updates.retain(|_| flags.next().unwrap_or(true));
        before - self.updates.len()
    }

    /// Fold neighbouring delete/insert pairs, reading in document order.
    fn fold(&mut self) -> usize {
        let mut folded: Vec<AtomicUpdate> = Vec::with_capacity(self.updates.len());
        let mut merged = 0;

        for update in self.updates.drain(..).rev() {
            if let Some(last) = folded.last_mut() {
                if let Some(replace) = last.merge(&update) {
                    *last = replace;
                    merged += 1;
                    continue;
                }
            }
            folded.push(update);
        }
        folded.reverse();
        self.updates = folded;
        merged
    }
}
