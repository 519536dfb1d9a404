//! Pseudo-legal move generation.
//!
//! One generation routine per piece family, selected by a match on the
//! piece tag. Every routine walks the precomputed neighbor links; blocking
//! and capture color are honored, king safety is not.

mod knights;
mod pawns;
mod sliders;

use super::types::{MoveList, Occupant, Piece, Square};
use super::Position;

impl Position {
    /// All pseudo-legal moves for the side to move.
    ///
    /// Moves are grouped by origin square in board index order; within one
    /// sliding piece, by direction-token order then increasing distance.
    /// Squares holding the other color, or nothing, contribute no moves.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mover = self.side_to_move();
        let mut moves = MoveList::new();

        for from in Square::all() {
            let Occupant::Piece(color, piece) = self.occupant(from) else {
                continue;
            };
            if color != mover {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, &mut moves),
                Piece::Bishop | Piece::Rook | Piece::Queen | Piece::King => {
                    self.generate_slider_moves(from, piece, &mut moves);
                }
            }
        }

        moves
    }
}
