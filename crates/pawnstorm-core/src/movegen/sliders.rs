//! Sliding piece (rook, bishop, queen) move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Walk each direction until the edge, an own piece (excluded), or an
/// enemy piece (included as a capture).
pub(super) fn gen_slider(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(sq) = cur {
            match board.color_at(sq) {
                None => out.push(sq),
                Some(c) => {
                    if c != color {
                        out.push(sq);
                    }
                    break;
                }
            }
            cur = sq.offset(dr, dc);
        }
    }
}
