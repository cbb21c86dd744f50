//! Per-kind update constructors.
//!
//! Each constructor reads the table once and fills the update header
//! (shift, first affected PRE, parent and target kind), so that batches can
//! order, elide and merge without touching the table again.

mod delete;
mod insert;
mod rename;
mod replace;
mod update_value;

pub use delete::build_delete;
pub use insert::{build_insert, build_insert_attr};
pub use rename::build_rename;
pub use replace::{build_replace, merge_into_replace};
pub use update_value::build_update_value;

use strata_core::{NodeKind, Pre, TableError};
use strata_table::Table;

use crate::error::UpdateResult;

/// Kind of an existing row, or an out-of-bounds error.
fn target_kind<T: Table + ?Sized>(table: &T, pre: Pre) -> UpdateResult<NodeKind> {
    let rows = table.row_count();
    if pre < 0 || pre >= rows {
        return Err(TableError::out_of_bounds(pre, rows.max(0) as usize).into());
    }
    Ok(table.kind(pre))
}

/// Validate an insertion point, which may equal the row count.
fn insertion_point<T: Table + ?Sized>(table: &T, pre: Pre) -> UpdateResult<()> {
    let rows = table.row_count();
    if pre < 0 || pre > rows {
        return Err(TableError::out_of_bounds(pre, rows.max(0) as usize).into());
    }
    Ok(())
}
