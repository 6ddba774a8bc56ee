//! Core chess types: board representation, move generation, and game rules.

mod attacks;
mod board;
mod chess_move;
mod color;
mod error;
mod game;
mod make_move;
pub mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod placement;
mod square;

pub use attacks::is_attacked;
pub use board::{Board, PrettyBoard};
pub use chess_move::{Move, MoveRecord};
pub use color::Color;
pub use error::{BoardError, GameError, PlacementError};
pub use game::{GameResult, GameState, GameStatus};
pub use movegen::{generate_legal_moves, has_legal_move, is_legal_move, legal_moves, pseudo_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use square::Square;
