//! PRE mapping between coordinate spaces and DIST repair.
//!
//! Structural updates are indexed in ascending location order together
//! with their accumulated shift. A PRE can then be mapped from the table
//! as it was before the batch ("before") to the table after all structural
//! primitives ran ("after") and back, with one binary search each.
//!
//! Both keys are non-decreasing along the index: `first_affected` because
//! updates inside a removed subtree have been elided, and
//! `first_affected + accumulated_shift` because each step adds at least
//! the rows the step removes.

use std::collections::HashSet;

use strata_core::{NodeKind, Pre};
use strata_table::Table;
use tracing::trace;

use crate::error::{UpdateError, UpdateResult};
use crate::update::AtomicUpdate;

/// Direction of a PRE mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Map a PRE of the original table into the updated table.
    BeforeToAfter,
    /// Map a PRE of the updated table back into the original table.
    AfterToBefore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ShiftEntry {
    first_affected: Pre,
    accumulated_shift: Pre,
}

/// Accumulated shifts of a batch's structural updates.
#[derive(Debug, Clone, Default)]
pub struct ShiftIndex {
    entries: Vec<ShiftEntry>,
}

impl ShiftIndex {
    /// Index structural updates given in ascending location order with
    /// accumulated shifts already computed.
    pub fn new<'a>(ascending: impl IntoIterator<Item = &'a AtomicUpdate>) -> Self {
        let entries = ascending
            .into_iter()
            .filter(|u| u.is_structural())
            .map(|u| ShiftEntry {
                first_affected: u.first_affected(),
                accumulated_shift: u.accumulated_shift(),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if no update changes the row count.
    pub fn is_neutral(&self) -> bool {
        self.entries.iter().all(|e| e.accumulated_shift == 0)
    }

    /// Map a PRE of the original table into the updated table.
    pub fn to_after(&self, pre: Pre) -> Pre {
        // rightmost update whose first affected row lies at or before `pre`
        let index = self.entries.partition_point(|e| e.first_affected <= pre);
        match index.checked_sub(1) {
            Some(i) => pre + self.entries[i].accumulated_shift,
            None => pre,
        }
    }

    /// Map a PRE of the updated table back into the original table.
    pub fn to_before(&self, pre: Pre) -> Pre {
        let index = self
            .entries
            .partition_point(|e| e.first_affected + e.accumulated_shift <= pre);
        match index.checked_sub(1) {
            Some(i) => pre - self.entries[i].accumulated_shift,
            None => pre,
        }
    }

    pub fn resolve(&self, pre: Pre, direction: Direction) -> Pre {
        match direction {
            Direction::BeforeToAfter => self.to_after(pre),
            Direction::AfterToBefore => self.to_before(pre),
        }
    }

    /// Rewrite every stale DIST after the structural primitives ran.
    ///
    /// From each update's first affected row (in after coordinates) the walk
    /// visits the row and then jumps over its subtree, which reaches exactly
    /// the following siblings of the row and of its ancestors. A row already
    /// visited by an earlier walk ends the walk. Returns the number of DIST
    /// values written.
    pub fn repair_distances<T: Table + ?Sized>(&self, table: &mut T) -> UpdateResult<usize> {
        if self.is_neutral() {
            return Ok(0);
        }
        let rows = table.row_count();
        let mut visited = HashSet::new();
        let mut writes = 0;

        for entry in &self.entries {
            let mut pre = entry.first_affected + entry.accumulated_shift;
            while (0..rows).contains(&pre) && visited.insert(pre) {
                let kind = table.kind(pre);
                if !kind.is_document() {
                    let dist = self.new_dist(table, pre, kind);
                    if dist < 1 {
                        return Err(UpdateError::internal(format!(
                            "computed DIST {dist} for node {pre}"
                        )));
                    }
                    trace!(pre, dist, "repair dist");
                    table.set_dist(pre, kind, dist);
                    writes += 1;
                }
                pre += table.size(pre, kind);
            }
        }
        Ok(writes)
    }

    /// DIST of the row at after-PRE `pre`, derived from its stale DIST.
    fn new_dist<T: Table + ?Sized>(&self, table: &T, pre: Pre, kind: NodeKind) -> Pre {
        let before = self.to_before(pre);
        let stale = if kind.is_document() {
            before + 1
        } else {
            table.dist(pre, kind)
        };
        let parent_before = before - stale;
        pre - self.to_after(parent_before)
    }
}
