//! Strata Integration Test Framework
//!
//! Provides a fluent API for writing batch scenarios against a `MemTable`.
//!
//! # Structure
//!
//! - **markup** - Tables and clips are written as small XML fragments
//! - **steps** - Each step collects edits into one batch and executes it
//! - **assertions** - Every step checks its outcome and the resulting table
//!
//! Every step also checks the table's DIST/SIZE consistency unless told
//! otherwise.
//!
//! # Example
//!
//! ```ignore
//! use strata_tests::prelude::*;
//!
//! pub fn scenario() -> Scenario {
//!     Scenario::new("delete_shift")
//!         .document("<a><b/><c/></a>")
//!         .step("delete_b", |s| s.delete(2), |a| a.structural(1).rows(3))
//! }
//!
//! #[test]
//! fn test() {
//!     scenario().run().unwrap();
//! }
//! ```

mod scenario;

pub use assertion::{Assertion, AssertionBuilder, StepOutput};
pub use error::{ScenarioError, ScenarioResult};
pub use fixtures::Clip;
pub use loader::{load_document, load_fragment};
pub use random::{DocumentGenerator, EditGenerator};
pub use runner::Runner;
pub use scenario::{BatchKind, Edit, Scenario, Step, StepBuilder};

/// Markup documents shared by the regression scenarios.
pub mod docs {
    pub use crate::fixtures::docs::*;
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder, StepOutput};
    pub use crate::docs;
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::fixtures::Clip;
    pub use crate::loader::{load_document, load_fragment};
    pub use crate::random::{DocumentGenerator, EditGenerator};
    pub use crate::scenario::{BatchKind, Edit, Scenario, StepBuilder};

    pub use strata_core::{NodeKind, Pre};
    pub use strata_table::{check, MemTable, Table, TreeBuilder};
    pub use strata_update::{
        DeclarativeBatch, Direction, ExecuteOptions, ExecuteOutcome, SequenceRule, ShiftIndex,
        StreamingBatch, UpdateError,
    };
}
