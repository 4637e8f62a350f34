// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::event::LabeledEvent;
use crate::marker::MarkerSet;
use crate::passes::{IndependencePass, PrunePass};

fn ev(source: i64, kind: &str) -> LabeledEvent {
    LabeledEvent::new(source, kind)
}

fn independent() -> MarkerSet<LabeledEvent> {
    vec![ev(1, "a"), ev(2, "a")].into_iter().collect()
}

#[test]
fn test_all_independent_span_is_excluded() {
    let universe = vec![vec![ev(1, "a"), ev(2, "a"), ev(3, "b")]];
    let outcome = IndependencePass::new(independent()).prune(&universe);

    assert!(outcome.interleavings.is_empty());
    assert_eq!(outcome.stats.flagged, 1);
}

#[test]
fn test_dependent_event_inside_span_is_kept() {
    let universe = vec![
        vec![ev(1, "a"), ev(2, "a"), ev(3, "b")], // span [0,1]: excluded
        vec![ev(1, "a"), ev(3, "b"), ev(2, "a")], // span [0,2] holds (3,b): kept
        vec![ev(3, "b"), ev(2, "a"), ev(1, "a")], // span [1,2]: excluded
        vec![ev(3, "b")],                          // no markers: kept
    ];
    let outcome = IndependencePass::new(independent()).prune(&universe);

    assert_eq!(outcome.interleavings, vec![universe[1].clone(), universe[3].clone()]);
    assert_eq!(outcome.stats.input, 4);
    assert_eq!(outcome.stats.output, 2);
    assert_eq!(outcome.stats.buckets, 4);
}

#[test]
fn test_duplicate_of_excluded_interleaving_is_removed() {
    let redundant = vec![ev(2, "a"), ev(1, "a")];
    let universe = vec![redundant.clone(), vec![ev(5, "c")], redundant];
    let outcome = IndependencePass::new(independent()).prune(&universe);

    assert_eq!(outcome.interleavings, vec![vec![ev(5, "c")]]);
}

#[test]
fn test_empty_markers_pass_through() {
    let universe = vec![vec![ev(1, "a"), ev(2, "a")], vec![ev(3, "b")]];
    let outcome = IndependencePass::new(MarkerSet::default()).prune(&universe);

    assert_eq!(outcome.interleavings, universe);
    assert_eq!(outcome.stats.flagged, 0);
}
