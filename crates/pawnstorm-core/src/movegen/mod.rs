//! Pseudo-legal generation per piece kind, filtered to legal moves by a
//! simulate-and-check pass.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::{DIAGONAL, ORTHOGONAL};
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

const QUEEN_DIRS: [(i8, i8); 8] = [
    ORTHOGONAL[0],
    ORTHOGONAL[1],
    ORTHOGONAL[2],
    ORTHOGONAL[3],
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
];

/// Push every on-board offset target not held by a `color` piece.
fn push_offsets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc)
            && board.color_at(to) != Some(color)
        {
            out.push(to);
        }
    }
}

/// Destinations for the piece on `from` by movement pattern alone.
///
/// Returns an empty list for an empty square. Does not check whether the
/// move exposes the mover's king.
pub fn pseudo_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    let Some(piece) = board.piece_at(from) else {
        return out;
    };
    let color = piece.color();

    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, from, color, &mut out),
        PieceKind::Knight => gen_knight(board, from, color, &mut out),
        PieceKind::Bishop => gen_slider(board, from, color, &DIAGONAL, &mut out),
        PieceKind::Rook => gen_slider(board, from, color, &ORTHOGONAL, &mut out),
        PieceKind::Queen => gen_slider(board, from, color, &QUEEN_DIRS, &mut out),
        PieceKind::King => gen_king(board, from, color, &mut out),
    }

    out
}

/// Return `true` if moving `from -> to` leaves the mover's king safe.
///
/// Probes a scratch copy of `board`; the original is never written.
fn keeps_king_safe(board: &Board, color: Color, from: Square, to: Square) -> bool {
    !board.make_move(Move::new(from, to)).in_check(color)
}

/// Legal destinations for the piece on `from`.
///
/// Every pseudo-legal destination is re-validated against king safety, which
/// also restricts a side in check to evasions, blocks, and captures.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(color) = board.color_at(from) else {
        return Vec::new();
    };
    let mut moves = pseudo_moves(board, from);
    moves.retain(|&to| keeps_king_safe(board, color, from, to));
    moves
}

/// All legal moves for `color`, origins in row-major order.
pub fn generate_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces(color)
        .flat_map(|(from, _)| {
            legal_moves(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Return `true` if `color` has at least one legal move.
///
/// Stops at the first one found, which keeps termination checks cheap.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board.pieces(color).any(|(from, _)| {
        pseudo_moves(board, from)
            .into_iter()
            .any(|to| keeps_king_safe(board, color, from, to))
    })
}

/// Return `true` if `from -> to` is legal with `side_to_move` on move.
pub fn is_legal_move(board: &Board, side_to_move: Color, from: Square, to: Square) -> bool {
    board.color_at(from) == Some(side_to_move) && legal_moves(board, from).contains(&to)
}
