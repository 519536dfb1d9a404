//! Apply/revert round-trip tests.

use rand::prelude::*;

use crate::board::{Color, Move, Piece, Position, Square, UndoToken};

fn find_move(pos: &Position, from: &str, to: &str) -> Move {
    let from: Square = from.parse().unwrap();
    let to: Square = to.parse().unwrap();
    for mv in pos.generate_moves().iter() {
        if mv.from() == from && mv.to() == to {
            return *mv;
        }
    }
    panic!("expected move {from}{to} not found");
}

#[test]
fn test_apply_moves_the_piece_and_toggles_color() {
    let mut pos = Position::new();
    let mv = find_move(&pos, "e2", "e4");
    pos.apply(mv);

    assert!(pos.piece_at("e2".parse().unwrap()).is_none());
    assert_eq!(
        pos.piece_at("e4".parse().unwrap()),
        Some((Color::White, Piece::Pawn))
    );
    assert!(!pos.white_to_move());
}

#[test]
fn test_apply_then_revert_is_identity() {
    let mut pos = Position::new();
    let before = pos.clone();

    let mv = find_move(&pos, "g1", "f3");
    let token = pos.apply(mv);
    assert_ne!(pos, before);

    pos.revert(mv, token);
    assert_eq!(pos, before);
}

#[test]
fn test_capture_is_restored_by_revert() {
    let mut pos = Position::try_from_fen("k7/8/3p4/8/3R4/8/8/7K w - - 0 1").unwrap();
    let before = pos.clone();
    let victim: Square = "d6".parse().unwrap();

    let mv = find_move(&pos, "d4", "d6");
    let token = pos.apply(mv);
    assert_eq!(pos.piece_at(victim), Some((Color::White, Piece::Rook)));

    pos.revert(mv, token);
    assert_eq!(pos, before);
    assert_eq!(pos.piece_at(victim), Some((Color::Black, Piece::Pawn)));
}

#[test]
fn test_random_playout_unwinds_to_the_start() {
    let mut pos = Position::new();
    let initial = pos.clone();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut history: Vec<(Move, UndoToken)> = Vec::new();

    for _ in 0..200 {
        let moves = pos.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        let token = pos.apply(mv);
        history.push((mv, token));
    }

    assert!(history.len() > 50, "playout ended suspiciously early");

    while let Some((mv, token)) = history.pop() {
        pos.revert(mv, token);
    }
    assert_eq!(pos, initial);
}

#[test]
fn test_colors_alternate_strictly_during_playout() {
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for ply in 0..60 {
        assert_eq!(pos.white_to_move(), ply % 2 == 0);
        let moves = pos.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        pos.apply(mv);
    }
}

#[test]
#[should_panic(expected = "apply: origin")]
fn test_apply_from_empty_square_fails_fast() {
    let mut pos = Position::new();
    let mv = Move::new("e5".parse().unwrap(), "e6".parse().unwrap());
    pos.apply(mv);
}
