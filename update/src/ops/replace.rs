//! REPLACE - swaps a subtree for a clip, and delete/insert folding.

use strata_core::{DataClip, Pre};
use strata_table::Table;

use super::target_kind;
use crate::error::UpdateResult;
use crate::update::{AtomicUpdate, UpdateHeader, UpdateOp};

/// Build a replace of the subtree rooted at `pre` with `clip`.
pub fn build_replace<T: Table + ?Sized>(
    table: &T,
    pre: Pre,
    clip: DataClip,
) -> UpdateResult<AtomicUpdate> {
    let kind = target_kind(table, pre)?;
    let size = table.size(pre, kind);
    let shift = clip.size() - size;
    Ok(AtomicUpdate {
        header: UpdateHeader {
            location: pre,
            parent: table.parent(pre, kind),
            shift,
            accumulated_shift: shift,
            first_affected: pre + size,
            kind,
        },
        op: UpdateOp::Replace { clip },
    })
}

/// Fold a delete and an insert that fill the same slot into one replace.
///
/// `earlier` precedes `later` in document order. Two shapes qualify:
/// an insert at `L` followed by a delete of `L`, and a delete of `L`
/// followed by an insert right behind the deleted subtree. In both cases
/// the insert's parent must be the deleted node's parent. Attribute slots
/// never fold, since element content cannot take an attribute's place.
///
/// The replace keeps the delete's location and first affected PRE, sums
/// both shifts and takes the later update's accumulated shift.
pub fn merge_into_replace(earlier: &AtomicUpdate, later: &AtomicUpdate) -> Option<AtomicUpdate> {
    let (delete, insert) = match (&earlier.op, &later.op) {
        (UpdateOp::Insert { .. }, UpdateOp::Delete) if later.location() == earlier.location() => {
            (later, earlier)
        }
        (UpdateOp::Delete, UpdateOp::Insert { .. })
            if later.location() == earlier.first_affected() =>
        {
            (earlier, later)
        }
        _ => return None,
    };
    if insert.parent() != delete.parent() || delete.kind().is_attribute() {
        return None;
    }
    let clip = insert.insertion_clip()?.clone();
    Some(AtomicUpdate {
        header: UpdateHeader {
            location: delete.location(),
            parent: delete.parent(),
            shift: earlier.shift() + later.shift(),
            accumulated_shift: later.accumulated_shift(),
            first_affected: delete.first_affected(),
            kind: delete.kind(),
        },
        op: UpdateOp::Replace { clip },
    })
}
