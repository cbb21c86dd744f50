//! Scenario definition and builder.

use strata_core::Pre;
use strata_table::MemTable;

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::ScenarioResult;
use crate::fixtures::Clip;
use crate::runner::Runner;

/// Which batch collects a step's edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchKind {
    /// Edits are admitted one by one in ascending location order.
    #[default]
    Streaming,
    /// Edits are listed in descending location order and checked at once.
    Declarative,
}

/// One update request of a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Delete(Pre),
    Insert { pre: Pre, parent: Pre, clip: Clip },
    InsertAttr { pre: Pre, parent: Pre, clip: Clip },
    Replace { pre: Pre, clip: Clip },
    Rename { pre: Pre, name: String },
    UpdateValue { pre: Pre, value: String },
}

impl Edit {
    /// Target or insertion location.
    pub fn location(&self) -> Pre {
        match self {
            Edit::Delete(pre)
            | Edit::Insert { pre, .. }
            | Edit::InsertAttr { pre, .. }
            | Edit::Replace { pre, .. }
            | Edit::Rename { pre, .. }
            | Edit::UpdateValue { pre, .. } => *pre,
        }
    }
}

/// A step in a scenario: one batch with its assertion.
#[derive(Debug)]
pub struct Step {
    /// Step name (for reporting).
    pub name: String,
    /// Edits in the order they are added to the batch.
    pub edits: Vec<Edit>,
    /// Merge adjacent texts on execution.
    pub merge_texts: bool,
    /// Only collect the edits and report the pending count.
    pub collect_only: bool,
    /// Assertion to verify the result.
    pub assertion: Assertion,
}

/// Builder for the edits of a step.
#[derive(Debug, Default)]
pub struct StepBuilder {
    edits: Vec<Edit>,
    merge_texts: bool,
    collect_only: bool,
}

impl StepBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delete(mut self, pre: Pre) -> Self {
        self.edits.push(Edit::Delete(pre));
        self
    }

    pub fn insert(mut self, pre: Pre, parent: Pre, clip: Clip) -> Self {
        self.edits.push(Edit::Insert { pre, parent, clip });
        self
    }

    pub fn insert_attr(mut self, pre: Pre, parent: Pre, clip: Clip) -> Self {
        self.edits.push(Edit::InsertAttr { pre, parent, clip });
        self
    }

    pub fn replace(mut self, pre: Pre, clip: Clip) -> Self {
        self.edits.push(Edit::Replace { pre, clip });
        self
    }

    pub fn rename(mut self, pre: Pre, name: impl Into<String>) -> Self {
        self.edits.push(Edit::Rename {
            pre,
            name: name.into(),
        });
        self
    }

    pub fn update_value(mut self, pre: Pre, value: impl Into<String>) -> Self {
        self.edits.push(Edit::UpdateValue {
            pre,
            value: value.into(),
        });
        self
    }

    /// Add prepared edits.
    pub fn edits(mut self, edits: impl IntoIterator<Item = Edit>) -> Self {
        self.edits.extend(edits);
        self
    }

    /// Merge adjacent texts when executing.
    pub fn merge_texts(mut self) -> Self {
        self.merge_texts = true;
        self
    }

    /// Do not execute; assert on the pending count instead.
    pub fn collect_only(mut self) -> Self {
        self.collect_only = true;
        self
    }

    /// The collected edits, in the order they were added.
    pub fn into_edits(self) -> Vec<Edit> {
        self.edits
    }
}

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Markup of the starting document.
    document: Option<String>,
    /// Prepared starting table; takes precedence over `document`.
    table: Option<MemTable>,
    batch: BatchKind,
    steps: Vec<Step>,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: None,
            table: None,
            batch: BatchKind::Streaming,
            steps: Vec::new(),
        }
    }

    /// Set the starting document as markup.
    pub fn document(mut self, markup: impl Into<String>) -> Self {
        self.document = Some(markup.into());
        self
    }

    /// Start from a prepared table.
    pub fn table(mut self, table: MemTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Collect edits with streaming batches (the default).
    pub fn streaming(mut self) -> Self {
        self.batch = BatchKind::Streaming;
        self
    }

    /// Collect edits with declarative batches.
    pub fn declarative(mut self) -> Self {
        self.batch = BatchKind::Declarative;
        self
    }

    /// Add a step: one batch built by `edits_fn`, checked by `assertion_fn`.
    pub fn step<E, F>(mut self, name: impl Into<String>, edits_fn: E, assertion_fn: F) -> Self
    where
        E: FnOnce(StepBuilder) -> StepBuilder,
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let edits = edits_fn(StepBuilder::new());
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step {
            name: name.into(),
            edits: edits.edits,
            merge_texts: edits.merge_texts,
            collect_only: edits.collect_only,
            assertion,
        });
        self
    }

    /// Run the scenario and return the final table.
    pub fn run(&self) -> ScenarioResult<MemTable> {
        Runner::new(self).run()
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document_markup(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn initial_table(&self) -> Option<&MemTable> {
        self.table.as_ref()
    }

    pub fn batch(&self) -> BatchKind {
        self.batch
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("test")
            .document("<a><b/></a>")
            .declarative()
            .step("first", |s| s.delete(2).rename(1, "x"), |a| a.structural(1))
            .step("second", |s| s.insert(2, 1, Clip::element("c")).collect_only(), |a| a.pending(1));

        assert_eq!(scenario.name(), "test");
        assert_eq!(scenario.batch(), BatchKind::Declarative);
        assert_eq!(scenario.steps().len(), 2);
        assert_eq!(
            scenario.steps()[0].edits,
            vec![
                Edit::Delete(2),
                Edit::Rename {
                    pre: 1,
                    name: "x".into()
                }
            ]
        );
        assert!(scenario.steps()[1].collect_only);
        assert!(!scenario.steps()[1].merge_texts);
    }

    #[test]
    fn test_edit_location() {
        assert_eq!(Edit::Delete(4).location(), 4);
        assert_eq!(Edit::Replace { pre: 7, clip: Clip::text("t") }.location(), 7);
    }
}
