//! Chess board representation and pseudo-legal move generation.
//!
//! The board is a fixed arena of 64 squares joined by precomputed compass
//! neighbor links; a [`Position`] maps each square to its occupant. Move
//! generation honors piece geometry, blocking, and capture color, but not
//! king safety: the moves are pseudo-legal.
//!
//! # Example
//! ```
//! use chess_explorer::board::Position;
//!
//! let pos = Position::new();
//! let moves = pos.generate_moves();
//! println!("starting position has {} pseudo-legal moves", moves.len());
//! ```

mod display;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
pub(crate) mod topology;
mod types;

#[cfg(test)]
mod tests;

pub use display::Snapshot;
pub use error::{FenError, SquareError};
pub use fen::START_FEN;
pub use make_unmake::UndoToken;
pub use state::Position;
pub use types::{Color, Direction, Move, MoveList, Occupant, Piece, Square};

pub(crate) use state::{CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};
