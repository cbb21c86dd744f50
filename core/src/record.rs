//! Table rows.

use crate::{NodeKind, Pre};

/// A single row of a pre-order node table.
///
/// `size` counts the node itself plus all descendants. `dist` is the
/// offset to the parent row; rows without a parent store `pre + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    /// Kind of this node.
    pub kind: NodeKind,
    /// Subtree size including the node itself.
    pub size: Pre,
    /// Offset to the parent PRE.
    pub dist: Pre,
    /// Name token (elements, attributes, processing instructions).
    pub name: Vec<u8>,
    /// Namespace URI token.
    pub uri: Vec<u8>,
    /// Value token (attributes, texts, comments, processing instructions).
    pub value: Vec<u8>,
}

impl NodeRecord {
    /// Create a new record with empty tokens.
    pub fn new(kind: NodeKind, size: Pre, dist: Pre) -> Self {
        Self {
            kind,
            size,
            dist,
            name: Vec::new(),
            uri: Vec::new(),
            value: Vec::new(),
        }
    }

    /// Create a document row. Documents are parentless; tables compute
    /// their DIST instead of reading it.
    pub fn document(size: Pre) -> Self {
        Self::new(NodeKind::Document, size, 1)
    }

    /// Create an element row.
    pub fn element(name: impl Into<Vec<u8>>, size: Pre, dist: Pre) -> Self {
        Self::new(NodeKind::Element, size, dist).with_name(name)
    }

    /// Create an attribute row.
    pub fn attribute(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>, dist: Pre) -> Self {
        Self::new(NodeKind::Attribute, 1, dist)
            .with_name(name)
            .with_value(value)
    }

    /// Create a text row.
    pub fn text(value: impl Into<Vec<u8>>, dist: Pre) -> Self {
        Self::new(NodeKind::Text, 1, dist).with_value(value)
    }

    /// Create a comment row.
    pub fn comment(value: impl Into<Vec<u8>>, dist: Pre) -> Self {
        Self::new(NodeKind::Comment, 1, dist).with_value(value)
    }

    /// Create a processing instruction row.
    pub fn pi(target: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>, dist: Pre) -> Self {
        Self::new(NodeKind::ProcessingInstruction, 1, dist)
            .with_name(target)
            .with_value(value)
    }

    pub fn with_name(mut self, name: impl Into<Vec<u8>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_uri(mut self, uri: impl Into<Vec<u8>>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.value = value.into();
        self
    }
}
