use super::types::{Move, Occupant};
use super::Position;

/// State captured by [`Position::apply`], consumed by [`Position::revert`].
///
/// Holds the two occupants the move overwrites. Revert is pure writeback
/// from this token and never inspects the mutated board, so stale aliases
/// cannot corrupt the undo.
#[derive(Clone, Copy, Debug)]
pub struct UndoToken {
    moved: Occupant,
    captured: Occupant,
}

impl Position {
    /// Apply a generated move: the origin piece lands on the destination
    /// (overwriting whatever stood there), the origin empties, and the
    /// turn passes to the other color.
    ///
    /// # Panics
    /// Panics if the origin square is empty. Such a move was never
    /// produced by the generator for this position, and applying it would
    /// silently corrupt state.
    pub fn apply(&mut self, mv: Move) -> UndoToken {
        let moved = self.occupant(mv.from());
        assert!(
            !moved.is_empty(),
            "apply: origin {} is empty, move {mv} was not generated from this position",
            mv.from()
        );
        let captured = self.occupant(mv.to());

        self.set(mv.to(), moved);
        self.set(mv.from(), Occupant::Empty);
        self.white_to_move = !self.white_to_move;

        UndoToken { moved, captured }
    }

    /// Revert the most recent not-yet-reverted [`Position::apply`].
    ///
    /// Tokens must be consumed in LIFO order: each one is only valid
    /// against the exact board state its `apply` produced.
    pub fn revert(&mut self, mv: Move, token: UndoToken) {
        self.set(mv.from(), token.moved);
        self.set(mv.to(), token.captured);
        self.white_to_move = !self.white_to_move;
    }
}
