//! Node-count tests against this generator's own baseline.
//!
//! The counts are NOT FIDE perft values: moves that leave the king in
//! check are counted, pawn diagonal captures are not generated. Depths 1
//! and 2 coincide with standard perft (20, 400); deeper counts diverge.
//! The baseline figures were cross-checked against an independent model
//! of the same movement rules.

use crate::board::Position;
use crate::explore::count_nodes;
use crate::view::{NullObserver, ProgressTracker};

#[test]
fn test_count_nodes_depth_zero_is_one_everywhere() {
    let positions = [
        Position::new(),
        Position::try_from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap(),
        Position::try_from_fen("k7/8/8/3pP3/8/8/8/7K w - - 0 1").unwrap(),
    ];
    for mut pos in positions {
        assert_eq!(pos.count_nodes(0), 1);
    }
}

#[test]
fn test_starting_position_depth_one() {
    let mut pos = Position::new();
    assert_eq!(pos.count_nodes(1), 20);
}

#[test]
fn test_starting_position_depth_two() {
    let mut pos = Position::new();
    assert_eq!(pos.count_nodes(2), 400);
}

#[test]
fn test_starting_position_depth_three() {
    let mut pos = Position::new();
    assert_eq!(pos.count_nodes(3), 8888);
}

#[test]
fn test_starting_position_depth_four() {
    let mut pos = Position::new();
    assert_eq!(pos.count_nodes(4), 197_294);
}

#[test]
fn test_count_leaves_position_unchanged() {
    let mut pos = Position::new();
    let before = pos.clone();
    assert_eq!(pos.count_nodes(3), 8888);
    assert_eq!(pos, before);
}

#[test]
fn test_observer_sees_two_repaints_per_applied_move() {
    let progress = ProgressTracker::new();
    let mut pos = Position::new();
    let nodes = count_nodes(&mut pos, 2, &mut progress.clone());

    assert_eq!(nodes, 400);
    // one interior node at the root plus one per reply position
    assert_eq!(progress.interior_nodes(), 21);
    // every applied move is also reverted: 20 + 400 applies, two repaints each
    assert_eq!(progress.repaints(), 840);
}

#[test]
fn test_depth_zero_notifies_nothing() {
    let progress = ProgressTracker::new();
    let mut pos = Position::new();
    count_nodes(&mut pos, 0, &mut progress.clone());
    assert_eq!(progress.interior_nodes(), 0);
    assert_eq!(progress.repaints(), 0);
}

#[test]
fn test_empty_board_counts_one_leaf_at_any_depth() {
    let mut pos = Position::try_from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap();
    // no moves exist, so every depth collapses to zero leaves below the root
    assert_eq!(count_nodes(&mut pos, 3, &mut NullObserver), 0);
    assert_eq!(count_nodes(&mut pos, 0, &mut NullObserver), 1);
}
