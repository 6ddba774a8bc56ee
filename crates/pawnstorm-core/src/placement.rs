//! Piece placement strings (the first FEN field) for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::square::Square;

/// Placement string for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = PlacementError;

    /// Parse a placement such as `"6k1/5ppp/8/8/8/8/8/4K3"`, rank 8 first.
    ///
    /// The result is validated: one king per side, no pawns on back ranks.
    fn from_str(s: &str) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = s.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let row = 7 - rank_index as u8;
            let mut col: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col = col.saturating_add(digit as u8);
                    continue;
                }

                let piece =
                    Piece::from_letter(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                let sq = Square::new(row, col).ok_or(PlacementError::BadRankLength {
                    rank_index,
                    length: col as usize + 1,
                })?;
                board.set(sq, Some(piece));
                col += 1;
            }

            if col != 8 {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: col as usize,
                });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0u8..8).rev() {
            let mut empty_count = 0u8;
            for col in 0u8..8 {
                match Square::new(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
