//! Nested construction of well-formed row buffers.

use strata_core::{ClipSource, NodeKind, NodeRecord, Pre};

use crate::mem::MemTable;

/// Builds pre-order rows from nested open/close calls.
///
/// SIZE values are finalized when a node is closed; DIST values are
/// derived from the currently open ancestor. Nodes added at the top level
/// of a fragment are parentless and store `pre + 1`.
///
/// ```ignore
/// // <a><b>t</b><c/></a>
/// let table = TreeBuilder::document()
///     .element("a")
///     .element("b")
///     .text("t")
///     .close()
///     .leaf("c")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    rows: Vec<NodeRecord>,
    open: Vec<usize>,
}

impl TreeBuilder {
    /// Start a table rooted in a document node.
    pub fn document() -> Self {
        let mut builder = Self::default();
        builder.open(NodeRecord::document(1));
        builder
    }

    /// Start a parentless row buffer, typically used as clip data.
    pub fn fragment() -> Self {
        Self::default()
    }

    /// Open an element; following nodes become its children until `close`.
    pub fn element(mut self, name: impl Into<Vec<u8>>) -> Self {
        self.open(NodeRecord::element(name, 1, 0));
        self
    }

    /// Add a childless element.
    pub fn leaf(mut self, name: impl Into<Vec<u8>>) -> Self {
        self.push(NodeRecord::element(name, 1, 0));
        self
    }

    pub fn attribute(mut self, name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.push(NodeRecord::attribute(name, value, 0));
        self
    }

    pub fn text(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.push(NodeRecord::text(value, 0));
        self
    }

    pub fn comment(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.push(NodeRecord::comment(value, 0));
        self
    }

    pub fn pi(mut self, target: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.push(NodeRecord::pi(target, value, 0));
        self
    }

    /// Close the innermost open node. Closing with nothing open is a no-op.
    pub fn close(mut self) -> Self {
        if let Some(index) = self.open.pop() {
            self.rows[index].size = (self.rows.len() - index) as Pre;
        }
        self
    }

    /// Close all open nodes and return the rows.
    pub fn into_records(mut self) -> Vec<NodeRecord> {
        while !self.open.is_empty() {
            self = self.close();
        }
        self.rows
    }

    /// Close all open nodes and freeze the rows as clip data.
    pub fn into_source(self) -> ClipSource {
        self.into_records().into()
    }

    /// Close all open nodes and load the rows into a table.
    pub fn build(self) -> MemTable {
        MemTable::from_records(self.into_records())
    }

    fn push(&mut self, mut record: NodeRecord) {
        let pre = self.rows.len() as Pre;
        if record.kind != NodeKind::Document {
            let parent = self.open.last().map_or(-1, |&index| index as Pre);
            record.dist = pre - parent;
        }
        self.rows.push(record);
    }

    fn open(&mut self, record: NodeRecord) {
        self.push(record);
        self.open.push(self.rows.len() - 1);
    }
}
