pub mod board;
pub mod cli;
pub mod explore;
pub mod view;

pub use board::{
    Color, Direction, FenError, Move, MoveList, Occupant, Piece, Position, Snapshot, Square,
    UndoToken, START_FEN,
};
pub use explore::count_nodes;
pub use view::{ExploreObserver, Fanout, NullObserver, ProgressTracker, TextBoardRenderer};
