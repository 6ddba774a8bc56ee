//! King move generation. Castling is not part of this rule set.

use crate::attacks::KING_OFFSETS;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::push_offsets;

/// Generate pseudo-legal king destinations.
///
/// Stepping into check is filtered later by the self-check pass in
/// [`legal_moves`](super::legal_moves), like every other move.
pub(super) fn gen_king(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_offsets(board, from, color, &KING_OFFSETS, out);
}
