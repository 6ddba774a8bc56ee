//! Coordinate moves and the history records produced when they are played.

use std::fmt;

use crate::piece::Piece;
use crate::square::Square;

/// A move from one square to another.
///
/// There are no special move kinds: promotion is implied when a pawn lands
/// on its farthest row and always yields a queen.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

/// One entry of a game's history, kept for display layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The piece that moved, as it stood on `from`.
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Piece removed from `to`, if the move was a capture.
    pub captured: Option<Piece>,
    /// The queen a pawn turned into, if the move promoted.
    pub promotion: Option<Piece>,
}

impl MoveRecord {
    /// The bare coordinate move this record describes.
    #[inline]
    pub fn chess_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}
