use super::super::topology;
use super::super::types::{Move, MoveList, Occupant, Piece, Square, Token};
use super::super::Position;

impl Position {
    /// Compound leap patterns; a pattern whose intermediate steps leave the
    /// board yields nothing.
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let mover = self.side_to_move();

        for token in Piece::Knight.movement(mover).tokens {
            let Token::Path(steps) = token else { continue };
            let Some(to) = topology::follow(from, steps) else {
                continue;
            };
            match self.occupant(to) {
                Occupant::Empty => moves.push(Move::new(from, to)),
                Occupant::Piece(color, _) if color != mover => moves.push(Move::new(from, to)),
                Occupant::Piece(..) => {}
            }
        }
    }
}
