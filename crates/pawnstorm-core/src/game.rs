//! Game state machine: side to move, history, and termination.

use std::fmt;

use tracing::{debug, info};

use crate::board::Board;
use crate::chess_move::{Move, MoveRecord};
use crate::color::Color;
use crate::error::{BoardError, GameError};
use crate::movegen;
use crate::piece::Piece;
use crate::square::Square;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    /// The result in which `color` wins.
    #[inline]
    pub const fn win_for(color: Color) -> GameResult {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// The winning side, or `None` for a draw.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => write!(f, "1-0"),
            GameResult::BlackWins => write!(f, "0-1"),
            GameResult::Draw => write!(f, "1/2-1/2"),
        }
    }
}

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Terminal(GameResult),
}

/// A game in progress: the board plus whose turn it is and what happened so far.
///
/// Moves only enter through [`GameState::apply_move`], which checks legality
/// first, so the board held here is always reachable under the rules.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    history: Vec<MoveRecord>,
    status: GameStatus,
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start from an arbitrary position.
    ///
    /// The board is validated, and the side not on move may not be in check.
    /// A position in which `side_to_move` has no legal move is terminal from
    /// the outset.
    pub fn from_position(board: Board, side_to_move: Color) -> Result<GameState, BoardError> {
        board.validate()?;
        if board.in_check(!side_to_move) {
            return Err(BoardError::OpponentInCheck {
                color: !side_to_move,
            });
        }
        let mut state = GameState {
            board,
            side_to_move,
            history: Vec::new(),
            status: GameStatus::InProgress,
        };
        state.status = state.detect_status();
        Ok(state)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Legal destinations for the piece on `sq`, whichever side owns it.
    pub fn legal_moves(&self, sq: Square) -> Vec<Square> {
        movegen::legal_moves(&self.board, sq)
    }

    /// Every legal move for the side to move.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        movegen::generate_legal_moves(&self.board, self.side_to_move)
    }

    /// Return `true` if the side to move may play `from -> to`.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        movegen::is_legal_move(&self.board, self.side_to_move, from, to)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, GameStatus::Terminal(_))
    }

    /// The outcome, once the game is over.
    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Terminal(result) => Some(result),
        }
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        self.board.in_check(color)
    }

    /// Play `from -> to` for the side to move.
    ///
    /// Fails with [`GameError::GameOver`] once the game has ended and with
    /// [`GameError::InvalidMove`] for anything not in the legal move list;
    /// in both cases the state is left untouched. A pawn reaching its last
    /// row becomes a queen.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.is_legal_move(from, to) {
            return Err(GameError::InvalidMove { from, to });
        }

        let mut next = self.board;
        let record = next
            .play(Move::new(from, to))
            .ok_or(GameError::InvalidMove { from, to })?;

        self.board = next;
        self.history.push(record);
        self.side_to_move = !self.side_to_move;

        debug!(
            ply = self.history.len(),
            mv = %record.chess_move(),
            captured = record.captured.is_some(),
            promoted = record.promotion.is_some(),
            "move applied"
        );

        self.status = self.detect_status();
        if let GameStatus::Terminal(result) = self.status {
            info!(%result, plies = self.history.len(), "game over");
        }

        Ok(record)
    }

    /// No legal move for the side to move ends the game: a loss when in
    /// check, otherwise a draw.
    fn detect_status(&self) -> GameStatus {
        let side = self.side_to_move;
        if movegen::has_legal_move(&self.board, side) {
            GameStatus::InProgress
        } else if self.board.in_check(side) {
            GameStatus::Terminal(GameResult::win_for(!side))
        } else {
            GameStatus::Terminal(GameResult::Draw)
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn position(placement: &str, side: Color) -> GameState {
        GameState::from_position(placement.parse().unwrap(), side).unwrap()
    }

    fn play(state: &mut GameState, from: &str, to: &str) -> MoveRecord {
        state.apply_move(sq(from), sq(to)).unwrap()
    }

    #[test]
    fn new_game_defaults() {
        let state = GameState::new();
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_terminal());
        assert_eq!(state.result(), None);
        assert!(state.history().is_empty());
        assert_eq!(state.all_legal_moves().len(), 20);
    }

    #[test]
    fn apply_move_flips_side_and_grows_history() {
        let mut state = GameState::new();
        let record = play(&mut state, "e2", "e4");
        assert_eq!(record.piece, Piece::WHITE_PAWN);
        assert_eq!(record.captured, None);
        assert_eq!(state.side_to_move(), Color::Black);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
        assert_eq!(state.piece_at(sq("e2")), None);

        play(&mut state, "e7", "e5");
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[1].chess_move(), Move::new(sq("e7"), sq("e5")));
    }

    #[test]
    fn illegal_move_is_rejected_without_change() {
        let mut state = GameState::new();
        let before = *state.board();

        // Wrong side, blocked rook, empty origin, no such pawn step.
        for (from, to) in [("e7", "e5"), ("a1", "a3"), ("e4", "e5"), ("e2", "e5")] {
            assert_eq!(
                state.apply_move(sq(from), sq(to)),
                Err(GameError::InvalidMove { from: sq(from), to: sq(to) })
            );
        }
        assert_eq!(*state.board(), before);
        assert_eq!(state.side_to_move(), Color::White);
        assert!(state.history().is_empty());
    }

    #[test]
    fn move_into_check_is_rejected() {
        // White rook e2 is pinned by the black rook on e8.
        let mut state = position("4r2k/8/8/8/8/8/4R3/4K3", Color::White);
        assert!(state.apply_move(sq("e2"), sq("a2")).is_err());
        assert!(state.apply_move(sq("e2"), sq("e8")).is_ok());
    }

    #[test]
    fn fools_mate_black_wins() {
        let mut state = GameState::new();
        play(&mut state, "f2", "f3");
        play(&mut state, "e7", "e5");
        play(&mut state, "g2", "g4");
        play(&mut state, "d8", "h4");
        assert!(state.is_terminal());
        assert!(state.in_check(Color::White));
        assert_eq!(state.result(), Some(GameResult::BlackWins));
        assert_eq!(state.status(), GameStatus::Terminal(GameResult::BlackWins));
    }

    #[test]
    fn back_rank_mate_marks_white_lost() {
        // Black rook delivers mate on the first rank; White's pawns box in the king.
        let state = position("6k1/8/8/8/8/8/5PPP/r5K1", Color::White);
        assert!(state.is_terminal());
        assert_eq!(state.result(), Some(GameResult::BlackWins));

        let mut state = position("r5k1/8/8/8/8/8/5PPP/6K1", Color::Black);
        assert!(!state.is_terminal());
        play(&mut state, "a8", "a1");
        assert!(state.is_terminal());
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.result(), Some(GameResult::BlackWins));
    }

    #[test]
    fn king_and_queen_mate_lone_king() {
        let mut state = position("8/8/8/8/8/4k3/7q/4K3", Color::Black);
        let record = play(&mut state, "h2", "e2");
        assert_eq!(record.piece, Piece::BLACK_QUEEN);
        assert!(state.is_terminal());
        assert!(state.in_check(Color::White));
        assert!(state.all_legal_moves().is_empty());
        assert_eq!(state.result(), Some(GameResult::BlackWins));
    }

    #[test]
    fn stalemate_is_a_draw() {
        // Black king a8, white queen moves to b6: no check, no moves.
        let mut state = position("k7/8/8/1Q6/8/8/8/7K", Color::White);
        play(&mut state, "b5", "b6");
        assert!(state.is_terminal());
        assert!(!state.in_check(Color::Black));
        assert_eq!(state.result(), Some(GameResult::Draw));
    }

    #[test]
    fn moves_after_game_over_fail() {
        let mut state = position("6k1/8/8/8/8/8/5PPP/r5K1", Color::White);
        assert_eq!(state.apply_move(sq("g1"), sq("h1")), Err(GameError::GameOver));
        assert!(state.history().is_empty());
    }

    #[test]
    fn promotion_yields_queen_of_same_color() {
        let mut state = position("4k3/P7/8/8/8/8/p7/4K3", Color::White);
        let record = play(&mut state, "a7", "a8");
        assert_eq!(record.promotion, Some(Piece::WHITE_QUEEN));
        assert_eq!(state.piece_at(sq("a8")), Some(Piece::WHITE_QUEEN));

        // a8 queen gives check along the rank; black escapes and promotes too.
        play(&mut state, "e8", "d7");
        play(&mut state, "e1", "f2");
        let record = play(&mut state, "a2", "a1");
        assert_eq!(record.promotion, Some(Piece::BLACK_QUEEN));
        assert_eq!(state.piece_at(sq("a1")), Some(Piece::BLACK_QUEEN));
    }

    #[test]
    fn capture_is_recorded() {
        let mut state = GameState::new();
        play(&mut state, "e2", "e4");
        play(&mut state, "d7", "d5");
        let record = play(&mut state, "e4", "d5");
        assert_eq!(record.captured, Some(Piece::BLACK_PAWN));
        assert_eq!(state.board().pieces(Color::Black).count(), 15);
    }

    #[test]
    fn from_position_rejects_invalid_board() {
        assert!(matches!(
            GameState::from_position(Board::empty(), Color::White),
            Err(BoardError::InvalidKingCount { .. })
        ));
    }

    #[test]
    fn from_position_rejects_king_left_in_check() {
        // Black is in check with White to move: the king could simply be taken.
        let board: Board = "4k3/8/8/8/8/8/4R3/K7".parse().unwrap();
        assert_eq!(
            GameState::from_position(board, Color::White).unwrap_err(),
            BoardError::OpponentInCheck {
                color: Color::Black
            }
        );
        // The same board is fine with Black to move.
        let state = GameState::from_position(board, Color::Black).unwrap();
        assert!(state.in_check(Color::Black));
        assert!(!state.is_terminal());
    }

    #[test]
    fn queries_follow_side_to_move() {
        let state = GameState::new();
        assert!(state.is_legal_move(sq("g1"), sq("f3")));
        assert!(!state.is_legal_move(sq("g8"), sq("f6")));
        // Destination listing works for either color.
        assert_eq!(state.legal_moves(sq("g8")).len(), 2);
    }

    #[test]
    fn result_display_and_winner() {
        assert_eq!(GameResult::WhiteWins.to_string(), "1-0");
        assert_eq!(GameResult::Draw.to_string(), "1/2-1/2");
        assert_eq!(GameResult::win_for(Color::Black), GameResult::BlackWins);
        assert_eq!(GameResult::BlackWins.winner(), Some(Color::Black));
        assert_eq!(GameResult::Draw.winner(), None);
    }
}
