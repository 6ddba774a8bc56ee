//! Move execution via copy-make.

use crate::board::Board;
use crate::chess_move::{Move, MoveRecord};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

impl Board {
    /// Apply `mv` in place and describe what happened.
    ///
    /// Moves the piece, clears the origin, and turns a pawn that reaches its
    /// farthest row into a queen of the same color. No legality check is
    /// done here; returns `None` (board untouched) if `from` is empty.
    pub(crate) fn play(&mut self, mv: Move) -> Option<MoveRecord> {
        let piece = self.take(mv.from())?;
        let captured = self.piece_at(mv.to());

        let promotion = (piece.kind() == PieceKind::Pawn
            && mv.to().row() == piece.color().promotion_row())
        .then(|| Piece::new(piece.color(), PieceKind::Queen));

        self.set(mv.to(), Some(promotion.unwrap_or(piece)));

        Some(MoveRecord {
            piece,
            from: mv.from(),
            to: mv.to(),
            captured,
            promotion,
        })
    }

    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// If the source square is empty the board is returned unchanged.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> Board {
        let mut b = *self;
        b.play(mv);
        b
    }
}
