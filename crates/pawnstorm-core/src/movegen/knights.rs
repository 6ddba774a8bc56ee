//! Knight move generation.

use crate::attacks::KNIGHT_OFFSETS;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::push_offsets;

/// Generate pseudo-legal knight destinations.
pub(super) fn gen_knight(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_offsets(board, from, color, &KNIGHT_OFFSETS, out);
}
