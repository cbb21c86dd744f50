//! Pairwise sequence rules.
//!
//! Both batches validate neighbouring updates with the same rules, applied
//! in document order: `first` is the update that comes first when the
//! table is read front to back.

use crate::error::{SequenceRule, UpdateError, UpdateResult};
use crate::update::{AtomicUpdate, UpdateOp};

/// Check that `second` may follow `first`.
pub fn check_sequence(first: &AtomicUpdate, second: &AtomicUpdate) -> UpdateResult<()> {
    let location = first.location();
    if second.location() < location {
        return Err(UpdateError::sequence(SequenceRule::Order, location));
    }
    if second.location() > location {
        return Ok(());
    }

    // an insert behind a delete of the same slot would be removed with it
    if second.is_insert() {
        match first.op {
            UpdateOp::Delete => {
                return Err(UpdateError::sequence(SequenceRule::InsertAfterDelete, location))
            }
            UpdateOp::Replace { .. } => {
                return Err(UpdateError::sequence(SequenceRule::InsertAfterReplace, location))
            }
            _ => {}
        }
    }

    let rule = match (&first.op, &second.op) {
        _ if first.destructive() && second.destructive() => SequenceRule::MultipleDestructive,
        (UpdateOp::Rename { .. }, UpdateOp::Rename { .. }) => SequenceRule::MultipleRenames,
        (UpdateOp::UpdateValue { .. }, UpdateOp::UpdateValue { .. }) => {
            SequenceRule::MultipleValueUpdates
        }
        // the destructive update would shift the next node onto the value update
        _ if second.destructive() && !first.is_structural() => {
            SequenceRule::ValueBeforeDestructive
        }
        _ => return Ok(()),
    };
    Err(UpdateError::sequence(rule, location))
}
