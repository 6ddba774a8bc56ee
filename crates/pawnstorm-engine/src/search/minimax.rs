//! Plain negamax without pruning.
//!
//! Visits every node to the given depth. Far too slow for play; it exists to
//! check that alpha-beta pruning never changes a score.

use pawnstorm_core::{Board, Color, generate_legal_moves};

use crate::eval::evaluate_for;
use crate::search::negamax::{INF, no_moves_score};

/// Exact negamax score for `side` searched `depth` plies deep.
pub fn minimax(board: &Board, side: Color, depth: u8) -> i32 {
    minimax_at(board, side, depth, 0)
}

fn minimax_at(board: &Board, side: Color, depth: u8, ply: u8) -> i32 {
    if depth == 0 {
        return evaluate_for(board, side);
    }

    let moves = generate_legal_moves(board, side);
    if moves.is_empty() {
        return no_moves_score(board, side, ply);
    }

    moves
        .into_iter()
        .map(|mv| -minimax_at(&board.make_move(mv), !side, depth - 1, ply + 1))
        .fold(-INF, i32::max)
}
