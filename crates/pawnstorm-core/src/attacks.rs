//! Square attack detection by ray scanning and offset probing.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Rook ray directions as `(row, col)` steps.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop ray directions as `(row, col)` steps.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Knight jump offsets.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// King step offsets.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Return the first occupied square along `(dr, dc)` from `sq`, exclusive.
fn first_blocker(board: &Board, sq: Square, (dr, dc): (i8, i8)) -> Option<Square> {
    let mut cur = sq.offset(dr, dc);
    while let Some(next) = cur {
        if board.is_occupied(next) {
            return Some(next);
        }
        cur = next.offset(dr, dc);
    }
    None
}

/// Return `true` if any `by_color` piece attacks `sq`.
///
/// The occupant of `sq` itself is ignored, so this answers both "is this
/// piece en prise" and "may a king step here". Read-only.
pub fn is_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    // Sliders: only the first piece met on each ray can attack along it.
    let ray_hit = |dirs: &[(i8, i8); 4], slides: fn(PieceKind) -> bool| {
        dirs.iter().any(|&dir| {
            first_blocker(board, sq, dir)
                .and_then(|blocker| board.piece_at(blocker))
                .is_some_and(|p| p.color() == by_color && slides(p.kind()))
        })
    };
    if ray_hit(&ORTHOGONAL, PieceKind::slides_orthogonally) {
        return true;
    }
    if ray_hit(&DIAGONAL, PieceKind::slides_diagonally) {
        return true;
    }

    let holds = |(dr, dc): (i8, i8), kind: PieceKind| {
        board
            .piece_at_coords(sq.row() as i8 + dr, sq.col() as i8 + dc)
            .is_some_and(|p| p.is(by_color, kind))
    };

    if KNIGHT_OFFSETS.iter().any(|&off| holds(off, PieceKind::Knight)) {
        return true;
    }

    // An attacking pawn stands one row behind `sq` from its own point of view.
    let back = -by_color.forward();
    if holds((back, -1), PieceKind::Pawn) || holds((back, 1), PieceKind::Pawn) {
        return true;
    }

    KING_OFFSETS.iter().any(|&off| holds(off, PieceKind::King))
}

impl Board {
    /// Return `true` if `sq` is attacked by any piece of `by_color`.
    #[inline]
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        is_attacked(self, sq, by_color)
    }

    /// Return `true` if `color`'s king is attacked by the other side.
    ///
    /// A board without a king for `color` is never in check.
    pub fn in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| is_attacked(self, king, color.flip()))
    }
}

#[cfg(test)]
mod tests {
    use super::is_attacked;
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn board(placement: &str) -> Board {
        placement.parse().unwrap()
    }

    #[test]
    fn starting_position_front_squares() {
        let b = Board::starting_position();
        // Pawn and knight cover the third rank.
        assert!(is_attacked(&b, sq("f3"), Color::White));
        assert!(is_attacked(&b, sq("a3"), Color::White));
        assert!(is_attacked(&b, sq("f6"), Color::Black));
        // Nobody reaches the middle of the board yet.
        assert!(!is_attacked(&b, sq("e4"), Color::White));
        assert!(!is_attacked(&b, sq("e4"), Color::Black));
        assert!(!is_attacked(&b, sq("e5"), Color::White));
    }

    #[test]
    fn rook_ray_blocked_by_first_piece() {
        // White rook a1, white pawn a4, black king h8, white king h1.
        let b = board("7k/8/8/8/P7/8/8/R6K");
        assert!(is_attacked(&b, sq("a3"), Color::White));
        assert!(is_attacked(&b, sq("a4"), Color::White));
        assert!(!is_attacked(&b, sq("a5"), Color::White));
    }

    #[test]
    fn bishop_does_not_attack_orthogonally() {
        let b = board("7k/8/8/8/3B4/8/8/K7");
        assert!(is_attacked(&b, sq("g7"), Color::White));
        assert!(is_attacked(&b, sq("a7"), Color::White));
        assert!(!is_attacked(&b, sq("d7"), Color::White));
        assert!(!is_attacked(&b, sq("h4"), Color::White));
    }

    #[test]
    fn queen_attacks_both_ray_kinds() {
        let b = board("7k/8/8/8/3q4/8/8/K7");
        assert!(is_attacked(&b, sq("d1"), Color::Black));
        assert!(is_attacked(&b, sq("h4"), Color::Black));
        assert!(is_attacked(&b, sq("a1"), Color::Black));
        assert!(!is_attacked(&b, sq("e6"), Color::Black));
    }

    #[test]
    fn enemy_blocker_stops_ray() {
        // Black rook e8 is shielded from e1 by a black pawn on e4.
        let b = board("4r2k/8/8/8/4p3/8/8/4K3");
        assert!(!is_attacked(&b, sq("e1"), Color::Black));
        assert!(is_attacked(&b, sq("e5"), Color::Black));
    }

    #[test]
    fn pawn_attacks_use_capture_direction() {
        // White pawn d4 attacks c5/e5, black pawn d5 attacks c4/e4.
        let b = board("7k/8/8/3p4/3P4/8/8/K7");
        assert!(is_attacked(&b, sq("c5"), Color::White));
        assert!(is_attacked(&b, sq("e5"), Color::White));
        assert!(!is_attacked(&b, sq("d5"), Color::White));
        assert!(!is_attacked(&b, sq("c3"), Color::White));
        assert!(is_attacked(&b, sq("c4"), Color::Black));
        assert!(is_attacked(&b, sq("e4"), Color::Black));
        assert!(!is_attacked(&b, sq("e6"), Color::Black));
    }

    #[test]
    fn knight_and_king_offsets() {
        let b = board("7k/8/8/8/3n4/8/8/K7");
        for target in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
            assert!(is_attacked(&b, sq(target), Color::Black), "knight should hit {target}");
        }
        assert!(!is_attacked(&b, sq("d5"), Color::Black));
        assert!(is_attacked(&b, sq("b2"), Color::White));
        assert!(is_attacked(&b, sq("g7"), Color::Black));
        assert!(!is_attacked(&b, sq("c3"), Color::White));
    }

    #[test]
    fn in_check_locates_king() {
        let b = board("4r2k/8/8/8/8/8/8/4K3");
        assert!(b.in_check(Color::White));
        assert!(!b.in_check(Color::Black));
        assert!(!Board::empty().in_check(Color::White));
        assert!(b.is_square_attacked(sq("e1"), Color::Black));
        assert!(!b.is_square_attacked(sq("d1"), Color::Black));
    }
}
