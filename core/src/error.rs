//! Errors raised by table primitives.

use crate::{NodeKind, Pre};
use thiserror::Error;

/// Errors that can occur while mutating a node table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// PRE value outside the table.
    #[error("PRE {pre} out of bounds (table has {rows} rows)")]
    OutOfBounds { pre: Pre, rows: usize },

    /// Node cannot take children.
    #[error("Node {pre} cannot be a parent")]
    NotAParent { pre: Pre },

    /// Insertion data without rows.
    #[error("Empty data clip")]
    EmptyClip,

    /// Row kind differs from the kind named by the caller.
    #[error("Kind mismatch at {pre}: expected {expected}, got {actual}")]
    KindMismatch {
        pre: Pre,
        expected: NodeKind,
        actual: NodeKind,
    },

    /// Attribute insertion with non-attribute content.
    #[error("Data clip contains non-attribute roots")]
    NotAttributes,
}

impl TableError {
    pub fn out_of_bounds(pre: Pre, rows: usize) -> Self {
        Self::OutOfBounds { pre, rows }
    }

    pub fn kind_mismatch(pre: Pre, expected: NodeKind, actual: NodeKind) -> Self {
        Self::KindMismatch {
            pre,
            expected,
            actual,
        }
    }
}

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
