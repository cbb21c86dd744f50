//! Update error types.

use std::fmt;

use strata_core::{Pre, TableError};
use thiserror::Error;

/// Result type for update operations.
pub type UpdateResult<T> = Result<T, UpdateError>;

/// Sequence rule broken by a pair of updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceRule {
    /// Locations go backwards in admission order.
    Order,
    /// Two deletes or replaces target the same node.
    MultipleDestructive,
    /// Two renames target the same node.
    MultipleRenames,
    /// Two value updates target the same node.
    MultipleValueUpdates,
    /// A rename or value update is followed by a delete or replace of the same node.
    ValueBeforeDestructive,
    /// An insert follows a delete at the same location.
    InsertAfterDelete,
    /// An insert follows a replace at the same location.
    InsertAfterReplace,
}

impl fmt::Display for SequenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SequenceRule::Order => "Invalid order at location",
            SequenceRule::MultipleDestructive => "Multiple deletes/replaces on node",
            SequenceRule::MultipleRenames => "Multiple renames on node",
            SequenceRule::MultipleValueUpdates => "Multiple updates on node",
            SequenceRule::ValueBeforeDestructive => {
                "Invalid sequence of value update and destructive update at location"
            }
            SequenceRule::InsertAfterDelete => "Invalid sequence of delete, insert at location",
            SequenceRule::InsertAfterReplace => "Invalid sequence of replace, insert at location",
        };
        f.write_str(text)
    }
}

/// Errors that can occur while collecting or executing updates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("Inconsistent update sequence: {rule} {location}")]
    InconsistentSequence { rule: SequenceRule, location: Pre },

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl UpdateError {
    pub fn sequence(rule: SequenceRule, location: Pre) -> Self {
        Self::InconsistentSequence { rule, location }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The broken rule, if this is a sequence error.
    pub fn rule(&self) -> Option<SequenceRule> {
        match self {
            Self::InconsistentSequence { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}
