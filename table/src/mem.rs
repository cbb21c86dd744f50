//! In-memory table storage.

use strata_core::{ClipSource, DataClip, NodeKind, NodeRecord, Pre, TableError, TableResult};

use crate::table::Table;

/// Primitive I/O counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    pub deletes: usize,
    pub inserts: usize,
    pub replaces: usize,
    pub renames: usize,
    pub value_updates: usize,
    pub dist_writes: usize,
    pub bulk_toggles: usize,
}

impl TableStats {
    /// Number of structural primitives (delete, insert, replace).
    pub fn structural(&self) -> usize {
        self.deletes + self.inserts + self.replaces
    }
}

/// The in-memory node table.
#[derive(Debug, Clone, Default)]
pub struct MemTable {
    rows: Vec<NodeRecord>,
    stats: TableStats,
    bulk_write: bool,
}

impl MemTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from rows that already carry SIZE and DIST.
    pub fn from_records(rows: Vec<NodeRecord>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// All rows in document order.
    pub fn records(&self) -> &[NodeRecord] {
        &self.rows
    }

    /// Get a row by PRE.
    pub fn record(&self, pre: Pre) -> Option<&NodeRecord> {
        usize::try_from(pre).ok().and_then(|i| self.rows.get(i))
    }

    /// Name token of the node at `pre`.
    pub fn name(&self, pre: Pre) -> &[u8] {
        &self.row(pre).name
    }

    /// Copy the rows into an immutable buffer clips can point into.
    pub fn snapshot(&self) -> ClipSource {
        self.rows.clone().into()
    }

    /// Primitive I/O counters since creation or the last reset.
    pub fn stats(&self) -> TableStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = TableStats::default();
    }

    /// Returns true while the bulk write hint is set.
    pub fn is_bulk_write(&self) -> bool {
        self.bulk_write
    }

    /// One line per row, for readable assertions.
    pub fn outline(&self) -> Vec<String> {
        (0..self.row_count())
            .map(|pre| {
                let row = self.row(pre);
                let label = if row.kind.is_named() {
                    String::from_utf8_lossy(&row.name).into_owned()
                } else {
                    format!("{:?}", String::from_utf8_lossy(&row.value))
                };
                format!(
                    "{pre} {} {label} size={} parent={}",
                    row.kind,
                    row.size,
                    self.parent(pre, row.kind)
                )
            })
            .collect()
    }

    fn row(&self, pre: Pre) -> &NodeRecord {
        &self.rows[slot(pre)]
    }

    fn row_mut(&mut self, pre: Pre) -> &mut NodeRecord {
        &mut self.rows[slot(pre)]
    }

    /// Validate an existing row.
    fn checked(&self, pre: Pre) -> TableResult<usize> {
        match usize::try_from(pre) {
            Ok(index) if index < self.rows.len() => Ok(index),
            _ => Err(TableError::out_of_bounds(pre, self.rows.len())),
        }
    }

    /// Validate an insertion point (may equal the row count).
    fn checked_gap(&self, pre: Pre) -> TableResult<usize> {
        match usize::try_from(pre) {
            Ok(index) if index <= self.rows.len() => Ok(index),
            _ => Err(TableError::out_of_bounds(pre, self.rows.len())),
        }
    }

    fn checked_parent(&self, pre: Pre, parent: Pre) -> TableResult<()> {
        if parent < 0 {
            return Ok(());
        }
        if parent >= pre {
            return Err(TableError::NotAParent { pre: parent });
        }
        self.checked(parent)?;
        if !self.kind(parent).has_children() {
            return Err(TableError::NotAParent { pre: parent });
        }
        Ok(())
    }

    fn checked_kind(&self, pre: Pre, kind: NodeKind) -> TableResult<usize> {
        let index = self.checked(pre)?;
        let actual = self.rows[index].kind;
        if actual != kind {
            return Err(TableError::kind_mismatch(pre, kind, actual));
        }
        Ok(index)
    }

    /// Add `delta` to the size of `parent` and all of its ancestors.
    fn resize_ancestors(&mut self, parent: Pre, delta: Pre) {
        let mut pre = parent;
        while pre >= 0 {
            let kind = self.kind(pre);
            self.row_mut(pre).size += delta;
            let next = self.parent(pre, kind);
            if next >= pre {
                break;
            }
            pre = next;
        }
    }

    /// Materialize clip rows for position `pre` below `parent`.
    fn clip_rows(clip: &DataClip, pre: Pre, parent: Pre) -> Vec<NodeRecord> {
        clip.rows()
            .map(|row| {
                let mut record = row.record.clone();
                if row.root {
                    record.dist = pre + row.offset - parent;
                }
                record
            })
            .collect()
    }

    fn splice(&mut self, pre: Pre, parent: Pre, clip: &DataClip) -> TableResult<()> {
        let index = self.checked_gap(pre)?;
        self.checked_parent(pre, parent)?;
        let rows = Self::clip_rows(clip, pre, parent);
        self.rows.splice(index..index, rows);
        self.resize_ancestors(parent, clip.size());
        self.stats.inserts += 1;
        Ok(())
    }
}

/// Row index for reads; negative PRE values map past the end so that
/// indexing fails.
fn slot(pre: Pre) -> usize {
    usize::try_from(pre).unwrap_or(usize::MAX)
}

impl Table for MemTable {
    fn row_count(&self) -> Pre {
        self.rows.len() as Pre
    }

    fn kind(&self, pre: Pre) -> NodeKind {
        self.row(pre).kind
    }

    fn size(&self, pre: Pre, _kind: NodeKind) -> Pre {
        self.row(pre).size
    }

    fn dist(&self, pre: Pre, kind: NodeKind) -> Pre {
        if kind.is_document() {
            return pre + 1;
        }
        self.row(pre).dist
    }

    fn set_dist(&mut self, pre: Pre, kind: NodeKind, dist: Pre) {
        if kind.is_document() {
            return;
        }
        self.row_mut(pre).dist = dist;
        self.stats.dist_writes += 1;
    }

    fn text(&self, pre: Pre, _is_text: bool) -> Vec<u8> {
        self.row(pre).value.clone()
    }

    fn delete(&mut self, pre: Pre) -> TableResult<()> {
        let index = self.checked(pre)?;
        let kind = self.rows[index].kind;
        let size = self.rows[index].size;
        let end = match usize::try_from(size) {
            Ok(size) if size >= 1 && index + size <= self.rows.len() => index + size,
            _ => return Err(TableError::out_of_bounds(pre + size, self.rows.len())),
        };
        let parent = self.parent(pre, kind);
        self.resize_ancestors(parent, -size);
        self.rows.drain(index..end);
        self.stats.deletes += 1;
        Ok(())
    }

    fn insert(&mut self, pre: Pre, parent: Pre, clip: &DataClip) -> TableResult<()> {
        self.splice(pre, parent, clip)
    }

    fn insert_attr(&mut self, pre: Pre, parent: Pre, clip: &DataClip) -> TableResult<()> {
        if !clip.is_attributes() {
            return Err(TableError::NotAttributes);
        }
        self.splice(pre, parent, clip)
    }

    fn replace(&mut self, pre: Pre, clip: &DataClip) -> TableResult<()> {
        let index = self.checked(pre)?;
        let kind = self.rows[index].kind;
        let size = self.rows[index].size;
        let end = match usize::try_from(size) {
            Ok(size) if size >= 1 && index + size <= self.rows.len() => index + size,
            _ => return Err(TableError::out_of_bounds(pre + size, self.rows.len())),
        };
        let parent = self.parent(pre, kind);
        let rows = Self::clip_rows(clip, pre, parent);
        self.rows.splice(index..end, rows);
        self.resize_ancestors(parent, clip.size() - size);
        self.stats.replaces += 1;
        Ok(())
    }

    fn update_name(
        &mut self,
        pre: Pre,
        kind: NodeKind,
        name: &[u8],
        uri: &[u8],
    ) -> TableResult<()> {
        let index = self.checked_kind(pre, kind)?;
        let row = &mut self.rows[index];
        row.name = name.to_vec();
        row.uri = uri.to_vec();
        self.stats.renames += 1;
        Ok(())
    }

    fn update_value(&mut self, pre: Pre, kind: NodeKind, value: &[u8]) -> TableResult<()> {
        let index = self.checked_kind(pre, kind)?;
        self.rows[index].value = value.to_vec();
        self.stats.value_updates += 1;
        Ok(())
    }

    fn set_bulk_write(&mut self, enabled: bool) {
        self.bulk_write = enabled;
        self.stats.bulk_toggles += 1;
    }
}
