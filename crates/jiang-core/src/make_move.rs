//! Move execution via copy-make.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;

impl Board {
    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// The source is cleared and the destination overwritten, removing any
    /// piece that stood there. Legality is not checked. If the source square
    /// is empty, the board is returned unchanged.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> Board {
        let mut b = *self;
        let Some(moving) = b.piece_on(mv.source()) else {
            return b;
        };
        b.set(mv.source(), None);
        b.set(mv.dest(), Some(moving));
        b
    }

    /// Return the piece `mv` would capture on this board, if any.
    ///
    /// Only opposing pieces count; a same-side occupant is not a capture.
    pub fn captured_by(&self, mv: Move) -> Option<Piece> {
        let moving = self.piece_on(mv.source())?;
        self.piece_on(mv.dest())
            .filter(|target| target.player() != moving.player())
    }
}
