//! Collaborator seams for the traversal: repaint and progress reporting.
//!
//! The traversal calls these synchronously between moves; implementations
//! must not block indefinitely. Nothing flows back into the core.

mod progress;
mod render;

pub use progress::ProgressTracker;
pub use render::TextBoardRenderer;

use crate::board::Snapshot;

/// Receives traversal events.
pub trait ExploreObserver {
    /// Called with a fresh board snapshot after every apply and revert.
    fn on_position(&mut self, snapshot: &Snapshot);

    /// Called once per internal (non-leaf) traversal node.
    fn on_progress(&mut self);
}

/// Observer that ignores every event; used for headless counting and
/// benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl ExploreObserver for NullObserver {
    fn on_position(&mut self, _snapshot: &Snapshot) {}
    fn on_progress(&mut self) {}
}

/// Forwards each event to both observers in order.
pub struct Fanout<A, B>(pub A, pub B);

impl<A: ExploreObserver, B: ExploreObserver> ExploreObserver for Fanout<A, B> {
    fn on_position(&mut self, snapshot: &Snapshot) {
        self.0.on_position(snapshot);
        self.1.on_position(snapshot);
    }

    fn on_progress(&mut self) {
        self.0.on_progress();
        self.1.on_progress();
    }
}
