//! Adjacent text node merging.

use strata_core::{NodeKind, Pre};
use strata_table::Table;
use tracing::debug;

use crate::declarative::DeclarativeBatch;
use crate::error::UpdateResult;
use crate::ops::build_delete;
use crate::options::ExecuteOptions;
use crate::update::AtomicUpdate;

/// Merge text siblings that became neighbours through structural updates.
///
/// `ascending` are the batch's structural updates in ascending location
/// order with accumulated shifts, after they have been applied. Each update
/// leaves at most two seams: in front of its location and, for inserts and
/// replaces, behind the inserted rows. Seams are inspected from the back of
/// the table to the front so that PRE values stay valid while merging.
///
/// The left text receives the concatenated value right away; the right
/// texts are removed afterwards through a trusted batch. Returns the number
/// of merged pairs.
pub fn merge_adjacent_texts<T: Table + ?Sized>(
    table: &mut T,
    ascending: &[AtomicUpdate],
) -> UpdateResult<usize> {
    // descending, so the trusted batch can take them as they are
    let mut deletes = Vec::new();
    let mut smallest_visited = Pre::MAX;

    for update in ascending.iter().rev() {
        let location = update.location() + update.accumulated_shift() - update.shift();
        if let Some(clip) = update.insertion_clip() {
            let last = location + clip.size() - 1;
            if last < smallest_visited {
                deletes.extend(merge_pair(table, last)?);
                smallest_visited = last;
            }
        }
        let before = location - 1;
        if before < smallest_visited {
            deletes.extend(merge_pair(table, before)?);
            smallest_visited = before;
        }
    }

    let merges = deletes.len();
    if merges > 0 {
        debug!(merges, "merging adjacent texts");
        // the caller owns the bulk write hint
        let options = ExecuteOptions::default().with_bulk_write_hint(false);
        DeclarativeBatch::trusted(table, deletes).execute_with(&options)?;
    }
    Ok(merges)
}

/// Merge the text at `left` with the text right behind it, if both exist
/// and share a parent. Returns the delete of the right text.
fn merge_pair<T: Table + ?Sized>(table: &mut T, left: Pre) -> UpdateResult<Option<AtomicUpdate>> {
    let right = left + 1;
    if left < 0 || right >= table.row_count() {
        return Ok(None);
    }
    if !table.kind(left).is_text() || !table.kind(right).is_text() {
        return Ok(None);
    }
    if table.parent(left, NodeKind::Text) != table.parent(right, NodeKind::Text) {
        return Ok(None);
    }

    let mut value = table.text(left, true);
    value.extend(table.text(right, true));
    table.update_value(left, NodeKind::Text, &value)?;
    build_delete(table, right).map(Some)
}
