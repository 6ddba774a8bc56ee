//! Negamax alpha-beta search.

use pawnstorm_core::{Board, Color, generate_legal_moves};

use crate::eval::evaluate_for;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 30_000;

/// Base score for checkmate (adjusted by ply for mate distance).
pub const MATE_SCORE: i32 = 9_999;

/// Scores above this threshold indicate a forced mate.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 256;

/// Mutable state threaded through one search.
#[derive(Debug, Default)]
pub struct SearchContext {
    /// Positions visited so far, leaves included.
    pub nodes: u64,
}

/// Score for a side with no legal moves at `ply`: mated if in check,
/// stalemated otherwise.
#[inline]
pub(super) fn no_moves_score(board: &Board, side: Color, ply: u8) -> i32 {
    if board.in_check(side) {
        -(MATE_SCORE - ply as i32)
    } else {
        0
    }
}

/// Negamax alpha-beta search.
///
/// Returns the best score for `side` within `(alpha, beta)`. A result at or
/// below `alpha` is an upper bound and one at or above `beta` a lower bound;
/// anything in between is exact. `board` is never modified: each child is a
/// fresh copy.
pub fn negamax(
    board: &Board,
    side: Color,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 {
        return evaluate_for(board, side);
    }

    let moves = generate_legal_moves(board, side);

    if moves.is_empty() {
        return no_moves_score(board, side, ply);
    }

    let mut best_score = -INF;

    for mv in moves {
        let child = board.make_move(mv);
        let score = -negamax(&child, !side, depth - 1, -beta, -alpha, ply + 1, ctx);

        if score > best_score {
            best_score = score;
            if score > alpha {
                alpha = score;
            }
        }

        if alpha >= beta {
            break;
        }
    }

    best_score
}
