//! Search and evaluation for pawnstorm.

pub mod eval;
pub mod search;

pub use eval::{evaluate, evaluate_for};
pub use search::minimax::minimax;
pub use search::negamax::{MATE_SCORE, negamax};
pub use search::{DEFAULT_DEPTH, SearchResult, Searcher, choose_move};
