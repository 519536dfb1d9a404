use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::Snapshot;

use super::ExploreObserver;

#[derive(Debug, Default)]
struct ProgressState {
    interior_nodes: u64,
    repaints: u64,
}

/// Shared counter of traversal progress.
///
/// The traversal owns one handle as its observer; a reporting UI (possibly
/// on another thread) reads through a clone. The lock is held only for the
/// counter update, so the traversal never waits on the reader.
#[derive(Clone, Debug, Default)]
pub struct ProgressTracker {
    inner: Arc<Mutex<ProgressState>>,
}

impl ProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        ProgressTracker::default()
    }

    /// Internal traversal nodes entered so far.
    #[must_use]
    pub fn interior_nodes(&self) -> u64 {
        self.inner.lock().interior_nodes
    }

    /// Repaint notifications delivered so far (one per apply, one per
    /// revert).
    #[must_use]
    pub fn repaints(&self) -> u64 {
        self.inner.lock().repaints
    }
}

impl ExploreObserver for ProgressTracker {
    fn on_position(&mut self, _snapshot: &Snapshot) {
        self.inner.lock().repaints += 1;
    }

    fn on_progress(&mut self) {
        self.inner.lock().interior_nodes += 1;
    }
}
