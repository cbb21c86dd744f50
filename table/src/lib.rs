//! Strata Table Storage
//!
//! This crate provides the node table the update engine mutates:
//! - `Table`: the primitive operations the engine relies on
//! - `MemTable`: an in-memory table with I/O counters
//! - `TreeBuilder`: well-formed tables and clip buffers from nested calls
//! - `check`: brute-force structure oracles used by tests

mod builder;
pub mod check;
mod mem;
mod table;

pub use builder::TreeBuilder;
pub use mem::{MemTable, TableStats};
pub use table::Table;
