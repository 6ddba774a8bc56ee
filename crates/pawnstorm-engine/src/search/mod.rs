//! Fixed-depth alpha-beta search with randomized root ordering.

pub mod minimax;
pub mod negamax;

use pawnstorm_core::{Board, Color, GameState, Move, generate_legal_moves};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use negamax::{INF, SearchContext, negamax, no_moves_score};

/// Search depth used when the caller has no preference.
pub const DEFAULT_DEPTH: u8 = 3;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, or `None` if the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Score from the searching side's perspective.
    pub score: i32,
    /// Total nodes visited during the search.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
}

/// Alpha-beta searcher.
///
/// Root moves are shuffled before searching and the first best one wins,
/// so equal positions do not always produce the same reply. Seed with
/// [`Searcher::with_seed`] for reproducible games.
pub struct Searcher {
    rng: StdRng,
}

impl Searcher {
    /// Create a searcher seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a searcher whose move ordering is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a move for the side to move in `state`.
    ///
    /// Returns `None` when the game is over. A depth of 0 is treated as 1.
    pub fn choose_move(&mut self, state: &GameState, depth: u8) -> Option<Move> {
        if state.is_terminal() {
            return None;
        }
        self.search(state.board(), state.side_to_move(), depth).best_move
    }

    /// Search `board` with `side` to move, `depth` plies deep.
    ///
    /// `board` is only read; every line is explored on copies.
    pub fn search(&mut self, board: &Board, side: Color, depth: u8) -> SearchResult {
        let depth = depth.max(1);
        let mut ctx = SearchContext { nodes: 1 };

        let mut moves = generate_legal_moves(board, side);
        if moves.is_empty() {
            let score = no_moves_score(board, side, 0);
            debug!(%side, score, "no legal moves at root");
            return SearchResult {
                best_move: None,
                score,
                nodes: ctx.nodes,
                depth,
            };
        }
        moves.shuffle(&mut self.rng);

        let mut alpha = -INF;
        let beta = INF;
        let mut best_move = None;
        let mut best_score = -INF;

        for mv in moves {
            let child = board.make_move(mv);
            let score = -negamax(&child, !side, depth - 1, -beta, -alpha, 1, &mut ctx);
            trace!(%mv, score, "root move");

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
                alpha = alpha.max(score);
            }
        }

        debug!(
            %side,
            depth,
            score = best_score,
            nodes = ctx.nodes,
            best = ?best_move,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            nodes: ctx.nodes,
            depth,
        }
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher").finish_non_exhaustive()
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick a move for the side to move with a freshly seeded [`Searcher`].
pub fn choose_move(state: &GameState, depth: u8) -> Option<Move> {
    Searcher::new().choose_move(state, depth)
}
