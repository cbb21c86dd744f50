//! Apply phase shared by both batches.
//!
//! Value updates go first since they never move rows. Structural updates
//! follow from the back of the table to the front, so no primitive sees
//! rows already renumbered by another one. DIST repair and text merging run
//! once all primitives are done.

use strata_table::Table;
use tracing::debug;

use crate::error::UpdateResult;
use crate::options::ExecuteOptions;
use crate::result::ExecuteOutcome;
use crate::shift::ShiftIndex;
use crate::text::merge_adjacent_texts;
use crate::update::AtomicUpdate;

/// Applies a validated batch to its table.
pub(crate) struct BatchExecutor<'t, T: Table + ?Sized> {
    table: &'t mut T,
    options: ExecuteOptions,
}

impl<'t, T: Table + ?Sized> BatchExecutor<'t, T> {
    pub(crate) fn new(table: &'t mut T, options: ExecuteOptions) -> Self {
        Self { table, options }
    }

    /// Run the apply phase. `ascending` holds the structural updates in
    /// ascending location order with accumulated shifts filled in.
    pub(crate) fn run(
        &mut self,
        values: &[AtomicUpdate],
        ascending: &[AtomicUpdate],
    ) -> UpdateResult<ExecuteOutcome> {
        if self.options.bulk_write_hint {
            self.table.set_bulk_write(true);
        }
        let result = self.apply(values, ascending);
        if self.options.bulk_write_hint {
            self.table.set_bulk_write(false);
        }
        result
    }

    fn apply(
        &mut self,
        values: &[AtomicUpdate],
        ascending: &[AtomicUpdate],
    ) -> UpdateResult<ExecuteOutcome> {
        debug!(
            structural = ascending.len(),
            value = values.len(),
            "applying updates"
        );
        for update in values {
            update.apply(&mut *self.table)?;
        }
        for update in ascending.iter().rev() {
            update.apply(&mut *self.table)?;
        }

        let dist_writes = ShiftIndex::new(ascending).repair_distances(&mut *self.table)?;
        let text_merges = if self.options.merge_adjacent_text {
            merge_adjacent_texts(&mut *self.table, ascending)?
        } else {
            0
        };
        debug!(dist_writes, text_merges, "batch applied");

        Ok(ExecuteOutcome {
            structural: ascending.len(),
            value: values.len(),
            dist_writes,
            text_merges,
            ..Default::default()
        })
    }
}

/// Fill accumulated shifts over structural updates in ascending order.
pub(crate) fn accumulate_shifts(ascending: &mut [AtomicUpdate]) {
    let mut total = 0;
    for update in ascending {
        total += update.shift();
        update.header.accumulated_shift = total;
    }
}
