//! Material balance evaluation.
//!
//! Sums fixed piece values for each side. Scores are from White's
//! perspective (positive = White ahead).

use pawnstorm_core::{Board, Color, PieceKind};

/// Piece values indexed by [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   |    10 |
/// | Knight |    30 |
/// | Bishop |    30 |
/// | Rook   |    50 |
/// | Queen  |    90 |
/// | King   |   900 |
///
/// Both kings are always on a valid board, so the king term cancels.
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [
    10,  // Pawn
    30,  // Knight
    30,  // Bishop
    50,  // Rook
    90,  // Queen
    900, // King
];

/// Value of a single piece of `kind`.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    MATERIAL_VALUE[kind.index()]
}

/// Evaluate material balance from White's perspective.
///
/// Every White piece adds its value and every Black piece subtracts it.
/// An empty board scores zero.
pub fn material(board: &Board) -> i32 {
    board
        .occupied()
        .map(|(_, piece)| match piece.color() {
            Color::White => piece_value(piece.kind()),
            Color::Black => -piece_value(piece.kind()),
        })
        .sum()
}
