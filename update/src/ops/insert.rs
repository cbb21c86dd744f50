//! INSERT - splices a clip in front of a PRE.

use strata_core::{DataClip, Pre, TableError};
use strata_table::Table;

use super::insertion_point;
use crate::error::UpdateResult;
use crate::update::{AtomicUpdate, UpdateHeader, UpdateOp};

/// Build an insert of `clip` at `pre` below `parent`.
pub fn build_insert<T: Table + ?Sized>(
    table: &T,
    pre: Pre,
    parent: Pre,
    clip: DataClip,
) -> UpdateResult<AtomicUpdate> {
    insertion_point(table, pre)?;
    Ok(AtomicUpdate {
        header: header(pre, parent, &clip),
        op: UpdateOp::Insert { clip },
    })
}

/// Build an attribute insert of `clip` at `pre` below `parent`.
pub fn build_insert_attr<T: Table + ?Sized>(
    table: &T,
    pre: Pre,
    parent: Pre,
    clip: DataClip,
) -> UpdateResult<AtomicUpdate> {
    insertion_point(table, pre)?;
    if !clip.is_attributes() {
        return Err(TableError::NotAttributes.into());
    }
    Ok(AtomicUpdate {
        header: header(pre, parent, &clip),
        op: UpdateOp::InsertAttr { clip },
    })
}

/// Inserted rows push everything from `pre` onwards down.
fn header(pre: Pre, parent: Pre, clip: &DataClip) -> UpdateHeader {
    UpdateHeader {
        location: pre,
        parent,
        shift: clip.size(),
        accumulated_shift: clip.size(),
        first_affected: pre,
        kind: clip.first_kind(),
    }
}
