//! Serde round-trips for the value types (compiled with `--features serde`).

use crate::board::{Color, Move, Occupant, Piece, Square};

#[test]
fn test_square_json_round_trip() {
    let sq: Square = "e4".parse().unwrap();
    let json = serde_json::to_string(&sq).unwrap();
    let back: Square = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sq);
}

#[test]
fn test_move_json_round_trip() {
    let mv = Move::new("g1".parse().unwrap(), "f3".parse().unwrap());
    let json = serde_json::to_string(&mv).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);
}

#[test]
fn test_occupant_json_round_trip() {
    for occ in [
        Occupant::Empty,
        Occupant::Piece(Color::White, Piece::Knight),
        Occupant::Piece(Color::Black, Piece::Queen),
    ] {
        let json = serde_json::to_string(&occ).unwrap();
        let back: Occupant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, occ);
    }
}
