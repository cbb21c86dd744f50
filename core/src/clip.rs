//! Insertion payloads.
//!
//! A `DataClip` references a contiguous slice of rows holding one or more
//! sibling subtrees. Several clips may share one `ClipSource`; cloning a
//! clip only bumps the reference count.

use std::fmt;
use std::sync::Arc;

use crate::{NodeRecord, Pre, TableError, TableResult};

/// Immutable, shared row buffer that clips point into.
pub type ClipSource = Arc<[NodeRecord]>;

/// Reference to a contiguous slice of a row buffer used as insertion data.
#[derive(Clone)]
pub struct DataClip {
    source: ClipSource,
    start: usize,
    end: usize,
    fragments: usize,
}

/// A row of a clip, addressed relative to the clip start.
#[derive(Debug, Clone, Copy)]
pub struct ClipRow<'a> {
    /// Offset of the row from the clip start.
    pub offset: Pre,
    /// The row itself. Its DIST is only meaningful for non-root rows.
    pub record: &'a NodeRecord,
    /// True if the row is the root of a fragment (its parent lies outside
    /// the clip).
    pub root: bool,
}

impl DataClip {
    /// Create a clip over `source[start..end]`.
    pub fn new(source: ClipSource, start: usize, end: usize) -> TableResult<Self> {
        if start >= end {
            return Err(TableError::EmptyClip);
        }
        if end > source.len() {
            return Err(TableError::out_of_bounds(end as Pre, source.len()));
        }
        let fragments = (start..end)
            .filter(|&pre| is_root(&source[pre], pre as Pre, start as Pre))
            .count();
        Ok(Self {
            source,
            start,
            end,
            fragments,
        })
    }

    /// Create a clip spanning the whole source.
    pub fn whole(source: ClipSource) -> TableResult<Self> {
        let end = source.len();
        Self::new(source, 0, end)
    }

    /// Number of rows in the clip.
    pub fn size(&self) -> Pre {
        (self.end - self.start) as Pre
    }

    /// First row of the clip in the source buffer.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end of the clip in the source buffer.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of sibling subtrees in the clip.
    pub fn fragments(&self) -> usize {
        self.fragments
    }

    /// Kind of the first fragment root.
    pub fn first_kind(&self) -> crate::NodeKind {
        self.source[self.start].kind
    }

    /// Returns true if every fragment root is an attribute.
    pub fn is_attributes(&self) -> bool {
        self.rows()
            .filter(|row| row.root)
            .all(|row| row.record.kind.is_attribute())
    }

    /// Iterate over the rows of the clip in document order.
    pub fn rows(&self) -> impl Iterator<Item = ClipRow<'_>> + '_ {
        let start = self.start as Pre;
        self.source[self.start..self.end]
            .iter()
            .enumerate()
            .map(move |(i, record)| ClipRow {
                offset: i as Pre,
                record,
                root: is_root(record, start + i as Pre, start),
            })
    }

    /// Get a row by its offset from the clip start.
    pub fn row(&self, offset: Pre) -> Option<&NodeRecord> {
        let index = usize::try_from(offset).ok()?;
        self.source[self.start..self.end].get(index)
    }
}

fn is_root(record: &NodeRecord, pre: Pre, start: Pre) -> bool {
    record.kind.is_document() || pre - record.dist < start
}

impl PartialEq for DataClip {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for DataClip {}

impl fmt::Debug for DataClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataClip")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("fragments", &self.fragments)
            .finish()
    }
}
