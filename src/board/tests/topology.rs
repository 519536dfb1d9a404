//! Neighbor-table tests.

use crate::board::{Direction, Square};

#[test]
fn test_symmetry_every_square_every_direction() {
    for sq in Square::all() {
        for dir in Direction::ALL {
            if let Some(neighbor) = sq.neighbor(dir) {
                assert_eq!(
                    neighbor.neighbor(dir.opposite()),
                    Some(sq),
                    "walking {dir:?} from {sq} and back diverged"
                );
            }
        }
    }
}

#[test]
fn test_corner_links() {
    let a1: Square = "a1".parse().unwrap();
    assert_eq!(a1.neighbor(Direction::South), None);
    assert_eq!(a1.neighbor(Direction::West), None);
    assert_eq!(a1.neighbor(Direction::SouthWest), None);
    assert_eq!(a1.neighbor(Direction::North), Some("a2".parse().unwrap()));
    assert_eq!(a1.neighbor(Direction::East), Some("b1".parse().unwrap()));
    assert_eq!(a1.neighbor(Direction::NorthEast), Some("b2".parse().unwrap()));

    let linked = Direction::ALL
        .iter()
        .filter(|&&dir| a1.neighbor(dir).is_some())
        .count();
    assert_eq!(linked, 3);
}

#[test]
fn test_interior_square_has_all_eight_links() {
    let e4: Square = "e4".parse().unwrap();
    for dir in Direction::ALL {
        assert!(e4.neighbor(dir).is_some());
    }
    assert_eq!(e4.neighbor(Direction::NorthWest), Some("d5".parse().unwrap()));
    assert_eq!(e4.neighbor(Direction::SouthEast), Some("f3".parse().unwrap()));
}

#[test]
fn test_edge_squares_lose_exactly_one_axis() {
    // every square on the h-file has no eastward links
    for rank in 0..8 {
        let sq = Square::new(7, rank).unwrap();
        assert_eq!(sq.neighbor(Direction::East), None);
        assert_eq!(sq.neighbor(Direction::NorthEast), None);
        assert_eq!(sq.neighbor(Direction::SouthEast), None);
    }
}

#[test]
fn test_board_has_exactly_64_squares() {
    assert_eq!(Square::all().count(), 64);
    assert_eq!(Square::COUNT, 64);
}
