//! UPDATE VALUE - overwrites a value token.

use strata_core::Pre;
use strata_table::Table;

use super::target_kind;
use crate::error::UpdateResult;
use crate::update::{AtomicUpdate, UpdateHeader, UpdateOp};

/// Build a value update of the node at `pre`.
pub fn build_update_value<T: Table + ?Sized>(
    table: &T,
    pre: Pre,
    value: &[u8],
) -> UpdateResult<AtomicUpdate> {
    let kind = target_kind(table, pre)?;
    Ok(AtomicUpdate {
        header: UpdateHeader {
            location: pre,
            parent: table.parent(pre, kind),
            shift: 0,
            accumulated_shift: 0,
            first_affected: pre,
            kind,
        },
        op: UpdateOp::UpdateValue {
            value: value.to_vec(),
        },
    })
}
