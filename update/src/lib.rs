//! Strata Update
//!
//! Collect, validate and apply batches of atomic table edits.
//!
//! Responsibilities:
//! - Build atomic updates from current table state
//! - Reject inconsistent update sequences before anything is applied
//! - Elide updates inside subtrees that are about to be removed
//! - Fold delete/insert pairs into a single replace
//! - Apply structural edits back to front and repair stale DIST values
//! - Merge text nodes that became adjacent
//!
//! # Module Structure
//!
//! - `update` - The `AtomicUpdate` sum type and its shared header
//! - `ops/` - Per-kind constructors (delete, insert, replace, rename, update_value)
//! - `validation` - Pairwise sequence rules
//! - `streaming` - Ascending batch with a one-update lookback
//! - `declarative` - Pre-sorted descending batch with a bulk elision pass
//! - `executor` - Apply phase shared by both batches
//! - `shift` - PRE mapping between coordinate spaces and DIST repair
//! - `text` - Adjacent text node merging
//! - `options` - Execution options
//! - `result` - Execution outcome
//! - `error` - Error types

mod declarative;
mod error;
mod executor;
pub mod ops;
mod options;
mod result;
mod shift;
mod streaming;
mod text;
mod update;
mod validation;

pub use declarative::DeclarativeBatch;
pub use error::{SequenceRule, UpdateError, UpdateResult};
pub use options::ExecuteOptions;
pub use result::ExecuteOutcome;
pub use shift::{Direction, ShiftIndex};
pub use streaming::{Admission, Lookback, StreamingBatch};
pub use text::merge_adjacent_texts;
pub use update::{AtomicUpdate, UpdateHeader, UpdateOp};
pub use validation::check_sequence;
