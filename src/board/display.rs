//! The board-to-renderer snapshot and the framed text dump.

use std::fmt;

use super::types::{Occupant, Square};
use super::Position;

/// Read-only copy of all 64 square contents in index order (a1, b1, ...,
/// h8), handed to renderers after every apply and revert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    squares: [Occupant; Square::COUNT],
}

impl Snapshot {
    /// The occupant of a square at snapshot time.
    #[must_use]
    pub fn occupant(&self, sq: Square) -> Occupant {
        self.squares[sq.index()]
    }

    /// All squares with their occupants, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().map(|sq| (sq, self.occupant(sq)))
    }
}

impl Position {
    /// Snapshot the current occupancy for a renderer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            squares: self.squares,
        }
    }
}

// Fixed-width dump: uppercase for White, lowercase for Black, '.' empty,
// files a-h left to right, ranks 8 down to 1, framed with coordinates.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   a b c d e f g h")?;
        writeln!(f, " +----------------")?;
        for rank in (0..8).rev() {
            write!(f, "{}| ", rank + 1)?;
            for file in 0..8 {
                let occ = self.occupant(Square::from_coords(file, rank));
                write!(f, "{} ", occ.to_board_char())?;
            }
            writeln!(f)?;
        }
        writeln!(f, " +----------------")?;
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}
