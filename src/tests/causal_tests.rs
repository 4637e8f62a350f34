// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::event::OpId;
use crate::marker::MarkerSet;
use crate::passes::{CausalOrderPass, PrunePass};

fn il(ids: &[i64]) -> Vec<OpId> {
    ids.iter().map(|&i| OpId(i)).collect()
}

fn markers(ids: &[i64]) -> MarkerSet<OpId> {
    ids.iter().map(|&i| OpId(i)).collect()
}

#[test]
fn test_boundary_interleavings() {
    // Predecessors 1,3 / successors 2,4
    let universe = vec![
        il(&[8, 1, 2, 3, 7, 4]), // P=[1,3] S=[2,5]: valid, excluded
        il(&[2, 1, 9, 3, 4]),    // P=[1,3] S=[0,4]: invalid, kept
    ];
    let pass = CausalOrderPass::new(markers(&[1, 3]), markers(&[2, 4]));
    let outcome = pass.prune(&universe);

    assert_eq!(outcome.interleavings, vec![universe[1].clone()]);
}

#[test]
fn test_failed_ops_keep_universe_order() {
    let universe = vec![
        il(&[1, 2, 3, 4]), // valid
        il(&[2, 1, 4, 3]), // successor first
        il(&[1, 3, 2, 4]), // valid
        il(&[5, 6]),       // no predecessors
        il(&[3, 1, 2, 4]), // predecessors out of order
    ];
    let pass = CausalOrderPass::new(markers(&[1, 3]), markers(&[2, 4]));
    let outcome = pass.prune(&universe);

    assert_eq!(
        outcome.interleavings,
        vec![universe[1].clone(), universe[3].clone(), universe[4].clone()]
    );
    assert_eq!(outcome.stats.flagged, 2);
}

#[test]
fn test_absent_successor_marker() {
    let pass = CausalOrderPass::new(markers(&[1, 3]), markers(&[2, 4]));

    // P=[0,1] S=[2]: one successor after both predecessors is enough
    let universe = vec![il(&[1, 3, 2])];
    assert!(pass.prune(&universe).interleavings.is_empty());

    // P=[1,2] S=[0]: nothing follows the predecessors
    let universe = vec![il(&[2, 1, 3])];
    assert_eq!(pass.prune(&universe).interleavings, universe);
}

#[test]
fn test_empty_marker_files_pass_through() {
    let universe = vec![il(&[1, 2]), il(&[2, 1]), il(&[])];
    let pass = CausalOrderPass::new(MarkerSet::default(), MarkerSet::default());
    let outcome = pass.prune(&universe);

    assert_eq!(outcome.interleavings, universe);
}
