//! Recursive move-tree traversal with replay notifications.

use crate::board::Position;
use crate::view::{ExploreObserver, NullObserver};

/// Count the leaves of the pseudo-legal move tree `depth` plies deep.
///
/// Depth 0 counts the current position as one leaf. Otherwise every
/// generated move is applied, explored, and reverted in LIFO order against
/// the single mutable position; the observer sees a fresh snapshot after
/// each apply and each revert, and its progress hook fires once per
/// internal node.
///
/// The result counts this generator's pseudo-legal tree. It does not match
/// legality-filtered perft tables and must not be compared against them.
pub fn count_nodes(pos: &mut Position, depth: usize, observer: &mut dyn ExploreObserver) -> u64 {
    if depth == 0 {
        return 1;
    }
    observer.on_progress();

    let moves = pos.generate_moves();
    let mut nodes = 0;
    for mv in moves.iter() {
        let token = pos.apply(*mv);
        observer.on_position(&pos.snapshot());
        nodes += count_nodes(pos, depth - 1, observer);
        pos.revert(*mv, token);
        observer.on_position(&pos.snapshot());
    }

    nodes
}

impl Position {
    /// Headless node count: [`count_nodes`] with no observer attached.
    #[must_use]
    pub fn count_nodes(&mut self, depth: usize) -> u64 {
        count_nodes(self, depth, &mut NullObserver)
    }
}
