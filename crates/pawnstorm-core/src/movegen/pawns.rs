//! Pawn move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Generate pseudo-legal pawn destinations for a `color` pawn on `from`.
///
/// Single push onto an empty square, double push from the start row when
/// both squares ahead are empty, and diagonal captures of enemy pieces.
pub(super) fn gen_pawn(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let fwd = color.forward();

    if let Some(one) = from.offset(fwd, 0)
        && !board.is_occupied(one)
    {
        out.push(one);
        if from.row() == color.pawn_start_row()
            && let Some(two) = one.offset(fwd, 0)
            && !board.is_occupied(two)
        {
            out.push(two);
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = from.offset(fwd, dc)
            && board.color_at(target) == Some(color.flip())
        {
            out.push(target);
        }
    }
}
