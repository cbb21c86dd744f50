//! DELETE - removes a subtree.

use strata_core::Pre;
use strata_table::Table;

use super::target_kind;
use crate::error::UpdateResult;
use crate::update::{AtomicUpdate, UpdateHeader, UpdateOp};

/// Build a delete of the subtree rooted at `pre`.
///
/// Rows behind the subtree move up by its size, so the first stale DIST is
/// the one right after it.
pub fn build_delete<T: Table + ?Sized>(table: &T, pre: Pre) -> UpdateResult<AtomicUpdate> {
    let kind = target_kind(table, pre)?;
    let size = table.size(pre, kind);
    Ok(AtomicUpdate {
        header: UpdateHeader {
            location: pre,
            parent: table.parent(pre, kind),
            shift: -size,
            accumulated_shift: -size,
            first_affected: pre + size,
            kind,
        },
        op: UpdateOp::Delete,
    })
}
