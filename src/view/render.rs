use std::io::{self, Write};

use crate::board::Snapshot;

use super::ExploreObserver;

/// Paints each snapshot as the framed text board.
///
/// Stands in for the graphical renderer: it consumes square contents and
/// emits nothing back to the core. Write failures are swallowed so a
/// closed pipe cannot abort a traversal.
pub struct TextBoardRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextBoardRenderer<W> {
    pub fn new(out: W) -> Self {
        TextBoardRenderer { out }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        writeln!(self.out, "{snapshot}")?;
        writeln!(self.out)
    }
}

impl<W: Write> ExploreObserver for TextBoardRenderer<W> {
    fn on_position(&mut self, snapshot: &Snapshot) {
        let _ = self.paint(snapshot);
    }

    fn on_progress(&mut self) {}
}
