//! Brute-force structure oracles.
//!
//! These recompute parent relations from SIZE values alone and compare
//! them with what DIST says. They walk the whole table and are meant for
//! tests and debugging, not for the update path.

use strata_core::{Pre, NO_PARENT};
use thiserror::Error;

use crate::table::Table;

/// A disagreement between SIZE-derived structure and stored DIST.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureViolation {
    #[error("Node {pre} has parent {actual} but its enclosing subtree starts at {expected}")]
    WrongParent { pre: Pre, expected: Pre, actual: Pre },

    #[error("Subtree of node {pre} ends at {end}, beyond its enclosing bound {bound}")]
    SizeOverflow { pre: Pre, end: Pre, bound: Pre },
}

/// Parent of every row as implied by SIZE values.
pub fn expected_parents(table: &impl Table) -> Result<Vec<Pre>, StructureViolation> {
    let rows = table.row_count();
    let mut parents = Vec::with_capacity(rows.max(0) as usize);
    // (pre, exclusive end) of the open ancestors
    let mut open: Vec<(Pre, Pre)> = Vec::new();

    for pre in 0..rows {
        while open.last().is_some_and(|&(_, end)| end <= pre) {
            open.pop();
        }
        let (parent, bound) = open.last().copied().unwrap_or((NO_PARENT, rows));
        let end = pre + table.size(pre, table.kind(pre));
        if end > bound || end <= pre {
            return Err(StructureViolation::SizeOverflow { pre, end, bound });
        }
        parents.push(parent);
        open.push((pre, end));
    }
    Ok(parents)
}

/// Check that every stored parent matches the SIZE-derived one.
pub fn verify_structure(table: &impl Table) -> Result<(), StructureViolation> {
    for (pre, expected) in expected_parents(table)?.into_iter().enumerate() {
        let pre = pre as Pre;
        let actual = table.parent(pre, table.kind(pre));
        if actual != expected {
            return Err(StructureViolation::WrongParent {
                pre,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Pairs of text nodes that are siblings and neighbours in document order.
pub fn adjacent_texts(table: &impl Table) -> Vec<(Pre, Pre)> {
    (0..table.row_count() - 1)
        .filter(|&pre| {
            let kind = table.kind(pre);
            let next = table.kind(pre + 1);
            kind.is_text()
                && next.is_text()
                && table.parent(pre, kind) == table.parent(pre + 1, next)
        })
        .map(|pre| (pre, pre + 1))
        .collect()
}
