//! Node kinds and PRE arithmetic.
//!
//! A table is addressed by PRE values: zero-based positions in document
//! order. Parents are addressed relative to their children by DIST
//! (`parent = pre - dist`). Both are signed so that the parent of a
//! document node (`-1`) and negative shifts need no conversions.

use std::fmt;

/// Position of a node in document order, or a signed offset between two
/// such positions (DIST, SIZE, shifts).
pub type Pre = i64;

/// PRE value used as the parent of parentless nodes.
pub const NO_PARENT: Pre = -1;

/// Kind of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Element,
    Attribute,
    Text,
    Comment,
    ProcessingInstruction,
}

impl NodeKind {
    /// Returns true for text nodes.
    pub fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text)
    }

    /// Returns true for attribute nodes.
    pub fn is_attribute(&self) -> bool {
        matches!(self, NodeKind::Attribute)
    }

    /// Returns true for document nodes, whose DIST is never stored.
    pub fn is_document(&self) -> bool {
        matches!(self, NodeKind::Document)
    }

    /// Returns true if nodes of this kind carry a name.
    pub fn is_named(&self) -> bool {
        matches!(
            self,
            NodeKind::Element | NodeKind::Attribute | NodeKind::ProcessingInstruction
        )
    }

    /// Returns true if nodes of this kind may have children.
    pub fn has_children(&self) -> bool {
        matches!(self, NodeKind::Document | NodeKind::Element)
    }

    /// Get the kind name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Element => "element",
            NodeKind::Attribute => "attribute",
            NodeKind::Text => "text",
            NodeKind::Comment => "comment",
            NodeKind::ProcessingInstruction => "processing-instruction",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
