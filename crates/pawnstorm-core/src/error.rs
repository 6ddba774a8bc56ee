//! Error types for position setup and move application.

use crate::color::Color;
use crate::square::Square;

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// Where the offending pawn stands.
        square: Square,
    },
    /// The side that just moved left its own king attacked.
    #[error("{color} is in check but not on move")]
    OpponentInCheck {
        /// The side whose king is attacked.
        color: Color,
    },
}

/// Errors from parsing a piece placement string such as `"4k3/8/8/8/8/8/8/4K3"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 `/`-separated ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based index in text order (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors returned by [`GameState::apply_move`](crate::game::GameState::apply_move).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// `from -> to` is not a legal move for the side to move.
    #[error("illegal move {from}{to}")]
    InvalidMove {
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// The game has already ended.
    #[error("game is already over")]
    GameOver,
}
