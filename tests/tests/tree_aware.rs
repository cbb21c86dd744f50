//! Tree-aware elision and merge sequences.

use strata_tests::prelude::*;

mod elision {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("tree_aware_elision")
            .document(docs::TREE_AWARE)
            .step(
                "everything_below_deleted_child",
                |s| {
                    s.delete(2)
                        .insert(3, 2, Clip::element("d"))
                        .insert(6, 5, Clip::element("d"))
                        .replace(6, Clip::element("d"))
                        .insert(7, 6, Clip::element("d"))
                        .collect_only()
                },
                |a| a.pending(1),
            )
            .step(
                "mixed_sequence",
                |s| {
                    s.insert(2, 2, Clip::element("d"))
                        .delete(3)
                        .insert(4, 2, Clip::element("d"))
                        .insert(6, 5, Clip::element("d"))
                        .replace(6, Clip::element("d"))
                        .insert(7, 6, Clip::element("d"))
                        .insert(7, 5, Clip::element("d"))
                        .collect_only()
                },
                |a| a.pending(6),
            )
    }

    #[test]
    fn test_elision_matrix() {
        scenario().run().unwrap();
    }
}

mod single_child {
    use super::*;

    #[test]
    fn test_insert_into_deleted_child() {
        Scenario::new("insert_into_deleted")
            .document(docs::SINGLE_CHILD)
            .step(
                "count",
                |s| s.delete(2).insert(3, 2, Clip::element("c")).collect_only(),
                |a| a.pending(1),
            )
            .step(
                "execute",
                |s| s.delete(2).insert(3, 2, Clip::element("c")),
                |a| {
                    a.structural(1).elided(1).outline([
                        "0 document \"\" size=2 parent=-1",
                        "1 element a size=1 parent=0",
                    ])
                },
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_insert_into_parent_of_deleted_child() {
        Scenario::new("insert_behind_deleted")
            .document(docs::SINGLE_CHILD)
            .step(
                "execute",
                |s| {
                    s.delete(2)
                        .insert(3, 2, Clip::element("c"))
                        .insert(3, 1, Clip::element("d"))
                },
                |a| {
                    a.structural(1).elided(1).merged(1).outline([
                        "0 document \"\" size=3 parent=-1",
                        "1 element a size=2 parent=0",
                        "2 element d size=1 parent=1",
                    ])
                },
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_replace_and_insert_into_parent() {
        Scenario::new("replace_then_insert")
            .document(docs::SINGLE_CHILD)
            .step(
                "execute",
                |s| {
                    s.replace(2, Clip::element("newb"))
                        .insert(3, 1, Clip::element("d"))
                },
                |a| {
                    a.structural(2).merged(0).outline([
                        "0 document \"\" size=4 parent=-1",
                        "1 element a size=3 parent=0",
                        "2 element newb size=1 parent=1",
                        "3 element d size=1 parent=1",
                    ])
                },
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_insert_into_replaced_child() {
        Scenario::new("insert_into_replaced")
            .document(docs::SINGLE_CHILD)
            .step(
                "execute",
                |s| {
                    s.replace(2, Clip::element("newb"))
                        .insert(3, 2, Clip::element("c"))
                },
                |a| {
                    a.structural(1).elided(1).outline([
                        "0 document \"\" size=3 parent=-1",
                        "1 element a size=2 parent=0",
                        "2 element newb size=1 parent=1",
                    ])
                },
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_rename_of_deleted_node() {
        Scenario::new("rename_deleted")
            .document(docs::SINGLE_CHILD)
            .step(
                "count",
                |s| s.delete(2).rename(2, "bb").collect_only(),
                |a| a.pending(1),
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_rename_of_deleted_attribute() {
        Scenario::new("rename_deleted_attribute")
            .document("<a><b id='1'/></a>")
            .step(
                "count",
                |s| s.delete(3).rename(3, "idx").collect_only(),
                |a| a.pending(1),
            )
            .step(
                "execute",
                |s| s.delete(3).rename(3, "idx"),
                |a| a.structural(1).elided(1).values(0).rows(3),
            )
            .run()
            .unwrap();
    }
}

mod merge_sequence {
    use super::*;

    #[test]
    fn test_two_inserts_never_merge() {
        Scenario::new("two_inserts")
            .document(docs::SINGLE_CHILD)
            .step(
                "count",
                |s| {
                    s.insert(3, 2, Clip::element("c"))
                        .insert(3, 2, Clip::element("d"))
                        .collect_only()
                },
                |a| a.pending(2),
            )
            .step(
                "execute",
                |s| {
                    s.insert(3, 2, Clip::element("c"))
                        .insert(3, 2, Clip::element("d"))
                },
                |a| {
                    a.structural(2).merged(0).outline([
                        "0 document \"\" size=5 parent=-1",
                        "1 element a size=4 parent=0",
                        "2 element b size=3 parent=1",
                        "3 element c size=1 parent=2",
                        "4 element d size=1 parent=2",
                    ])
                },
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_delete_then_insert_behind() {
        Scenario::new("delete_insert_behind")
            .document(docs::SINGLE_CHILD)
            .step(
                "execute",
                |s| s.delete(2).insert(3, 1, Clip::element("d")),
                |a| {
                    a.structural(1).merged(1).primitives(1).outline([
                        "0 document \"\" size=3 parent=-1",
                        "1 element a size=2 parent=0",
                        "2 element d size=1 parent=1",
                    ])
                },
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_delete_then_insert_behind_after_other_delete() {
        Scenario::new("delete_delete_insert")
            .document(docs::TWO_CHILDREN)
            .step(
                "count",
                |s| {
                    s.delete(2)
                        .delete(3)
                        .insert(4, 1, Clip::element("d"))
                        .collect_only()
                },
                |a| a.pending(2),
            )
            .step(
                "execute",
                |s| s.delete(2).delete(3).insert(4, 1, Clip::element("d")),
                |a| {
                    a.structural(2).merged(1).outline([
                        "0 document \"\" size=3 parent=-1",
                        "1 element a size=2 parent=0",
                        "2 element d size=1 parent=1",
                    ])
                },
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_insert_then_delete_same_slot() {
        Scenario::new("insert_delete")
            .document(docs::SINGLE_CHILD)
            .step(
                "execute",
                |s| s.insert(2, 1, Clip::element("d")).delete(2),
                |a| {
                    a.structural(1).merged(1).primitives(1).outline([
                        "0 document \"\" size=3 parent=-1",
                        "1 element a size=2 parent=0",
                        "2 element d size=1 parent=1",
                    ])
                },
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_declarative_batch_agrees() {
        // same edits as above, listed in descending order
        Scenario::new("merge_declarative")
            .document(docs::TWO_CHILDREN)
            .declarative()
            .step(
                "execute",
                |s| s.insert(4, 1, Clip::element("d")).delete(3).delete(2),
                |a| {
                    a.structural(2).merged(1).outline([
                        "0 document \"\" size=3 parent=-1",
                        "1 element a size=2 parent=0",
                        "2 element d size=1 parent=1",
                    ])
                },
            )
            .run()
            .unwrap();
    }
}
