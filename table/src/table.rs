//! The table collaborator.

use strata_core::{DataClip, NodeKind, Pre, TableResult};

/// Primitive operations on a pre-order node table.
///
/// Reads are addressed by PRE and panic if the PRE lies outside the table,
/// like slice indexing. Structural primitives renumber every row at and
/// after the edit by the net size delta, keep ancestor SIZE values correct,
/// but leave the DIST of shifted rows untouched. Restoring those is the
/// caller's job.
pub trait Table {
    /// Number of rows.
    fn row_count(&self) -> Pre;

    /// Kind of the node at `pre`.
    fn kind(&self, pre: Pre) -> NodeKind;

    /// Subtree size of the node at `pre`.
    fn size(&self, pre: Pre, kind: NodeKind) -> Pre;

    /// Stored DIST of the node at `pre`. Document nodes report `pre + 1`.
    fn dist(&self, pre: Pre, kind: NodeKind) -> Pre;

    /// Overwrite the DIST of the node at `pre`. Ignored for documents.
    fn set_dist(&mut self, pre: Pre, kind: NodeKind, dist: Pre);

    /// PRE of the parent, or `-1` for parentless nodes.
    fn parent(&self, pre: Pre, kind: NodeKind) -> Pre {
        pre - self.dist(pre, kind)
    }

    /// Value token of a text, comment, attribute or processing instruction.
    fn text(&self, pre: Pre, is_text: bool) -> Vec<u8>;

    /// Remove the subtree rooted at `pre`.
    fn delete(&mut self, pre: Pre) -> TableResult<()>;

    /// Insert the clip at `pre` as children of `parent`.
    fn insert(&mut self, pre: Pre, parent: Pre, clip: &DataClip) -> TableResult<()>;

    /// Insert attribute nodes at `pre` as attributes of `parent`.
    fn insert_attr(&mut self, pre: Pre, parent: Pre, clip: &DataClip) -> TableResult<()>;

    /// Replace the subtree rooted at `pre` with the clip.
    fn replace(&mut self, pre: Pre, clip: &DataClip) -> TableResult<()>;

    /// Overwrite name and namespace URI of the node at `pre`.
    fn update_name(&mut self, pre: Pre, kind: NodeKind, name: &[u8], uri: &[u8])
        -> TableResult<()>;

    /// Overwrite the value of the node at `pre`.
    fn update_value(&mut self, pre: Pre, kind: NodeKind, value: &[u8]) -> TableResult<()>;

    /// Buffering hint toggled around bulk structural writes.
    fn set_bulk_write(&mut self, _enabled: bool) {}
}
