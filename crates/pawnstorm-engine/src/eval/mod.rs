//! Static evaluation.

pub mod material;

use pawnstorm_core::{Board, Color};

pub use material::{MATERIAL_VALUE, piece_value};

/// Evaluate the position from White's perspective.
pub fn evaluate(board: &Board) -> i32 {
    material::material(board)
}

/// Evaluate the position from `color`'s perspective, as negamax wants it.
#[inline]
pub fn evaluate_for(board: &Board, color: Color) -> i32 {
    match color {
        Color::White => evaluate(board),
        Color::Black => -evaluate(board),
    }
}
