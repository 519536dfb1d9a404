//! The fixed 64-square adjacency table.
//!
//! Neighbor links are computed once from coordinate arithmetic and encode
//! geometry only; they never change. Off-board lookups yield `None`, which
//! every directional walk checks before stepping.

use once_cell::sync::Lazy;

use super::types::{Direction, Square};

static NEIGHBORS: Lazy<[[Option<Square>; 8]; 64]> = Lazy::new(|| {
    let mut table = [[None; 8]; 64];
    for (idx, links) in table.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        let file = sq.file() as isize;
        let rank = sq.rank() as isize;
        for dir in Direction::ALL {
            let (df, dr) = dir.delta();
            let nf = file + df;
            let nr = rank + dr;
            if (0..8).contains(&nf) && (0..8).contains(&nr) {
                links[dir.index()] = Some(Square::from_coords(nf as usize, nr as usize));
            }
        }
    }
    table
});

/// Neighbor of `from` one step in `dir`, or `None` at the board edge.
#[inline]
#[must_use]
pub(crate) fn neighbor(from: Square, dir: Direction) -> Option<Square> {
    NEIGHBORS[from.index()][dir.index()]
}

/// Follow a fixed step sequence from `from`; `None` if any step leaves the
/// board.
#[must_use]
pub(crate) fn follow(from: Square, steps: &[Direction]) -> Option<Square> {
    let mut sq = from;
    for &dir in steps {
        sq = neighbor(sq, dir)?;
    }
    Some(sq)
}

impl Square {
    /// The adjacent square one step in `dir`, or `None` at the board edge.
    #[inline]
    #[must_use]
    pub fn neighbor(self, dir: Direction) -> Option<Square> {
        neighbor(self, dir)
    }
}
