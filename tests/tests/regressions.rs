//! Regression batches with hand-checked results.

use strata_tests::prelude::*;

mod distance_caching {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("distance_caching")
            .document(docs::DISTANCE_CACHE)
            .step(
                "mixed_structural",
                |s| {
                    s.delete(3)
                        .replace(5, Clip::nested("dummy1"))
                        .insert(11, 10, Clip::nested("dummy2"))
                        .insert(13, 10, Clip::nested("dummy3"))
                        .delete(13)
                        .merge_texts()
                },
                |a| {
                    a.structural(5)
                        .merged(0)
                        .text_merges(0)
                        .rows(18)
                        .parents([
                            (17, 1),
                            (16, 15),
                            (15, 10),
                            (14, 10),
                            (13, 10),
                            (12, 11),
                            (11, 10),
                            (10, 9),
                            (9, 8),
                            (8, 1),
                            (7, 1),
                            (6, 1),
                            (5, 4),
                            (4, 1),
                            (3, 1),
                            (2, 1),
                            (1, 0),
                        ])
                },
            )
    }

    #[test]
    fn test_distances_after_mixed_batch() {
        let table = scenario().run().unwrap();
        assert_eq!(table.name(15), b"dummy3");
        assert_eq!(table.name(17), b"n14");
    }
}

mod text_merging {
    use super::*;

    fn edits(s: StepBuilder) -> StepBuilder {
        s.insert(3, 2, Clip::text("Tx0"))
            .delete(3)
            .insert(4, 2, Clip::text("Tx01"))
            .delete(5)
            .replace(6, Clip::text("T6new"))
            .insert(8, 7, Clip::text("Tx1"))
            .insert(8, 7, Clip::text("Tx2"))
            .insert(8, 1, Clip::text("Tx3"))
    }

    /// The same edits, listed the way a declarative batch expects them.
    fn descending(s: StepBuilder) -> StepBuilder {
        let mut edits = edits(StepBuilder::new()).into_edits();
        edits.reverse();
        s.edits(edits)
    }

    fn expected(a: AssertionBuilder) -> AssertionBuilder {
        a.structural(7)
            .merged(1)
            .text_merges(3)
            .no_adjacent_texts()
            .texts(["Tx0Tx01", "T4T6new", "Tx1Tx2", "Tx3"])
            .rows(8)
            .parents([(3, 2), (4, 1), (6, 5), (7, 1)])
    }

    pub fn streaming() -> Scenario {
        Scenario::new("text_merging")
            .document(docs::TEXT_MERGING)
            .step("merge", |s| edits(s).merge_texts(), expected)
    }

    pub fn declarative() -> Scenario {
        Scenario::new("text_merging_declarative")
            .document(docs::TEXT_MERGING)
            .declarative()
            .step("merge", |s| descending(s).merge_texts(), expected)
    }

    #[test]
    fn test_streaming_text_merging() {
        streaming().run().unwrap();
    }

    #[test]
    fn test_declarative_text_merging() {
        let streamed = streaming().run().unwrap();
        let declared = declarative().run().unwrap();
        assert_eq!(streamed.outline(), declared.outline());
    }
}
