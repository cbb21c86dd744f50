//! Atomic updates.
//!
//! Every update carries a header that is computed from table state when the
//! update is built, so that batches never have to read the table again while
//! ordering, eliding or merging.

use std::fmt;
use std::ops::Range;

use strata_core::{DataClip, NodeKind, Pre, TableResult};
use strata_table::Table;

use crate::ops;

/// Bookkeeping shared by all update kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateHeader {
    /// Target PRE.
    pub location: Pre,
    /// Parent of the target, or of the inserted nodes.
    pub parent: Pre,
    /// Net change in row count. Zero for value updates.
    pub shift: Pre,
    /// Sum of `shift` over all structural updates up to and including this one.
    pub accumulated_shift: Pre,
    /// First PRE whose DIST becomes stale.
    pub first_affected: Pre,
    /// Kind of the target node, or of the first inserted root.
    pub kind: NodeKind,
}

/// Payload per update kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOp {
    Delete,
    Insert { clip: DataClip },
    InsertAttr { clip: DataClip },
    Replace { clip: DataClip },
    Rename { name: Vec<u8>, uri: Vec<u8> },
    UpdateValue { value: Vec<u8> },
}

impl UpdateOp {
    /// Get the kind label as a string.
    pub fn label(&self) -> &'static str {
        match self {
            UpdateOp::Delete => "delete",
            UpdateOp::Insert { .. } => "insert",
            UpdateOp::InsertAttr { .. } => "insert-attr",
            UpdateOp::Replace { .. } => "replace",
            UpdateOp::Rename { .. } => "rename",
            UpdateOp::UpdateValue { .. } => "update-value",
        }
    }
}

/// A single table edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicUpdate {
    pub header: UpdateHeader,
    pub op: UpdateOp,
}

impl AtomicUpdate {
    pub fn location(&self) -> Pre {
        self.header.location
    }

    pub fn parent(&self) -> Pre {
        self.header.parent
    }

    pub fn shift(&self) -> Pre {
        self.header.shift
    }

    pub fn accumulated_shift(&self) -> Pre {
        self.header.accumulated_shift
    }

    pub fn first_affected(&self) -> Pre {
        self.header.first_affected
    }

    pub fn kind(&self) -> NodeKind {
        self.header.kind
    }

    /// Returns true for updates that erase the target node (delete, replace).
    pub fn destructive(&self) -> bool {
        matches!(self.op, UpdateOp::Delete | UpdateOp::Replace { .. })
    }

    /// Returns true for updates that change the row count layout.
    pub fn is_structural(&self) -> bool {
        !matches!(
            self.op,
            UpdateOp::Rename { .. } | UpdateOp::UpdateValue { .. }
        )
    }

    /// Returns true for inserts of any kind.
    pub fn is_insert(&self) -> bool {
        matches!(self.op, UpdateOp::Insert { .. } | UpdateOp::InsertAttr { .. })
    }

    /// Inserted rows for inserts and replaces.
    pub fn insertion_clip(&self) -> Option<&DataClip> {
        match &self.op {
            UpdateOp::Insert { clip }
            | UpdateOp::InsertAttr { clip }
            | UpdateOp::Replace { clip } => Some(clip),
            _ => None,
        }
    }

    /// PRE range of the subtree a destructive update removes.
    pub fn doomed_range(&self) -> Option<Range<Pre>> {
        self.destructive()
            .then(|| self.location()..self.first_affected())
    }

    /// Returns true if `later` only touches rows this update removes.
    ///
    /// That covers every location inside the doomed subtree, plus inserts
    /// at its exclusive end whose parent lies inside it.
    pub fn dooms(&self, later: &AtomicUpdate) -> bool {
        self.doomed_range()
            .is_some_and(|range| dooms_within(&range, later))
    }

    /// Fold this update and a later one into a single replace, if possible.
    pub fn merge(&self, later: &AtomicUpdate) -> Option<AtomicUpdate> {
        ops::merge_into_replace(self, later)
    }

    /// Perform the table primitive for this update.
    pub fn apply<T: Table + ?Sized>(&self, table: &mut T) -> TableResult<()> {
        let pre = self.location();
        match &self.op {
            UpdateOp::Delete => table.delete(pre),
            UpdateOp::Insert { clip } => table.insert(pre, self.parent(), clip),
            UpdateOp::InsertAttr { clip } => table.insert_attr(pre, self.parent(), clip),
            UpdateOp::Replace { clip } => table.replace(pre, clip),
            UpdateOp::Rename { name, uri } => table.update_name(pre, self.kind(), name, uri),
            UpdateOp::UpdateValue { value } => table.update_value(pre, self.kind(), value),
        }
    }
}

pub(crate) fn dooms_within(range: &Range<Pre>, later: &AtomicUpdate) -> bool {
    later.location() < range.end
        || (later.location() == range.end && later.is_insert() && range.contains(&later.parent()))
}

impl fmt::Display for AtomicUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.op.label(), self.location())
    }
}
