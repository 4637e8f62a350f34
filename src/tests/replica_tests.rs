// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::event::LabeledEvent;
use crate::passes::{PrunePass, ReplicaPass};

fn ev(source: i64, kind: &str) -> LabeledEvent {
    LabeledEvent::new(source, kind)
}

fn universe() -> Vec<Vec<LabeledEvent>> {
    vec![
        vec![ev(1, "x"), ev(2, "y"), ev(3, "z")], // rep of [0], tail {(2,y),(3,z)}
        vec![ev(1, "x"), ev(3, "z"), ev(2, "y")], // same bucket, holds the tail
        vec![ev(2, "y"), ev(4, "w"), ev(3, "z")], // replica absent, holds the tail
        vec![ev(2, "y"), ev(1, "x")],             // rep of [1], empty tail
        vec![ev(4, "w"), ev(1, "x"), ev(5, "v")], // misses (2,y)
        vec![ev(3, "z"), ev(5, "v")],             // misses (2,y)
    ]
}

#[test]
fn test_tail_group_excludes_other_interleavings() {
    let universe = universe();
    let outcome = ReplicaPass::new(1).prune(&universe);

    assert_eq!(
        outcome.interleavings,
        vec![
            universe[0].clone(),
            universe[3].clone(),
            universe[4].clone(),
            universe[5].clone(),
        ]
    );
    assert_eq!(outcome.stats.buckets, 3);
    assert_eq!(outcome.stats.flagged, 2);
}

#[test]
fn test_unknown_replica_is_noop() {
    let universe = universe();
    let outcome = ReplicaPass::new(42).prune(&universe);

    assert_eq!(outcome.interleavings, universe);
}

#[test]
fn test_duplicate_of_representative_is_kept() {
    let rep = vec![ev(1, "x"), ev(2, "y")];
    let universe = vec![rep.clone(), rep.clone(), vec![ev(2, "y")]];
    let outcome = ReplicaPass::new(1).prune(&universe);

    // The copy matches the representative exactly; the last row holds its tail
    assert_eq!(outcome.interleavings, vec![rep.clone(), rep]);
}
