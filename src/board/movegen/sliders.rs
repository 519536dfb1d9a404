use super::super::types::{Move, MoveList, Occupant, Piece, Square, Token};
use super::super::Position;

impl Position {
    /// Directional walk shared by bishop, rook, queen, and king (range 1).
    ///
    /// Each direction is walked up to the piece's range: empty squares are
    /// destinations, the first occupied square ends the walk and is a
    /// destination only when it holds the enemy.
    pub(crate) fn generate_slider_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let mover = self.side_to_move();
        let movement = piece.movement(mover);

        for token in movement.tokens {
            // slider tables carry single-step tokens only
            let Token::Step(dir) = token else { continue };
            let mut sq = from;
            for _ in 0..movement.range {
                let Some(next) = sq.neighbor(*dir) else { break };
                match self.occupant(next) {
                    Occupant::Empty => {
                        moves.push(Move::new(from, next));
                        sq = next;
                    }
                    Occupant::Piece(color, _) => {
                        if color != mover {
                            moves.push(Move::new(from, next));
                        }
                        break;
                    }
                }
            }
        }
    }
}
