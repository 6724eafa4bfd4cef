//! Attack and check detection.
//!
//! Works backwards from the target square: a square is attacked when a piece
//! of the attacking color sits where its own capture pattern would reach the
//! target. The target's occupant is irrelevant, so this answers both "is the
//! king in check" and "is this empty castling transit square covered".

use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    is_square_attacked(position, position.king_square(color), color.opposite())
}

pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    // An attacking pawn stands one row behind the target, relative to its own direction.
    let pawn_row = -attacker_color.pawn_direction();
    let pawn_attack = [-1i8, 1i8].iter().any(|&d_col| {
        square
            .offset(pawn_row, d_col)
            .is_some_and(|from| holds(position, from, attacker_color, PieceKind::Pawn))
    });
    if pawn_attack
        || any_step_holds(position, square, &KNIGHT_OFFSETS, attacker_color, PieceKind::Knight)
        || any_step_holds(position, square, &KING_OFFSETS, attacker_color, PieceKind::King)
    {
        return true;
    }

    let rook_like = |piece: Piece| matches!(piece.kind, PieceKind::Rook | PieceKind::Queen);
    if ROOK_DIRECTIONS.iter().any(|&direction| {
        first_piece_along(position, square, direction)
            .is_some_and(|piece| piece.color == attacker_color && rook_like(piece))
    }) {
        return true;
    }

    let bishop_like = |piece: Piece| matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen);
    BISHOP_DIRECTIONS.iter().any(|&direction| {
        first_piece_along(position, square, direction)
            .is_some_and(|piece| piece.color == attacker_color && bishop_like(piece))
    })
}

/// Squares of `attacker_color` pieces attacking `square`.
pub fn attackers_to_square(
    position: &Position,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    let mut attackers = Vec::new();

    let pawn_row = -attacker_color.pawn_direction();
    let pawn_offsets = [(pawn_row, -1i8), (pawn_row, 1i8)];
    for (offsets, kind) in [
        (&pawn_offsets[..], PieceKind::Pawn),
        (&KNIGHT_OFFSETS[..], PieceKind::Knight),
        (&KING_OFFSETS[..], PieceKind::King),
    ] {
        for &(d_row, d_col) in offsets {
            if let Some(from) = square.offset(d_row, d_col) {
                if holds(position, from, attacker_color, kind) {
                    attackers.push((from, kind));
                }
            }
        }
    }

    for (directions, slider) in [
        (ROOK_DIRECTIONS, PieceKind::Rook),
        (BISHOP_DIRECTIONS, PieceKind::Bishop),
    ] {
        for (d_row, d_col) in directions {
            let mut current = square;
            while let Some(next) = current.offset(d_row, d_col) {
                if let Some(piece) = position.piece_at(next) {
                    if piece.color == attacker_color
                        && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        attackers.push((next, piece.kind));
                    }
                    break;
                }
                current = next;
            }
        }
    }

    attackers
}

#[inline]
fn holds(position: &Position, square: Square, color: Color, kind: PieceKind) -> bool {
    position.piece_at(square).is_some_and(|piece| piece.is(color, kind))
}

fn any_step_holds(
    position: &Position,
    square: Square,
    offsets: &[(i8, i8)],
    color: Color,
    kind: PieceKind,
) -> bool {
    offsets.iter().any(|&(d_row, d_col)| {
        square
            .offset(d_row, d_col)
            .is_some_and(|from| holds(position, from, color, kind))
    })
}

fn first_piece_along(position: &Position, from: Square, (d_row, d_col): (i8, i8)) -> Option<Piece> {
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        if let Some(piece) = position.piece_at(next) {
            return Some(piece);
        }
        current = next;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{attackers_to_square, is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::utils::algebraic::algebraic_to_square;

    fn at(label: &str) -> Square {
        algebraic_to_square(label).expect("test square label should parse")
    }

    #[test]
    fn pawns_attack_diagonally_forward_only() {
        let position = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1")
            .expect("pawn FEN should parse");
        assert!(is_square_attacked(&position, at("d3"), Color::White));
        assert!(is_square_attacked(&position, at("f3"), Color::White));
        assert!(!is_square_attacked(&position, at("e3"), Color::White));
        assert!(!is_square_attacked(&position, at("d1"), Color::Black));

        let position = Position::from_fen("4k3/4p3/8/8/8/8/8/4K3 w - - 0 1")
            .expect("pawn FEN should parse");
        assert!(is_square_attacked(&position, at("d6"), Color::Black));
        assert!(!is_square_attacked(&position, at("d5"), Color::Black));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let position = Position::from_fen("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1")
            .expect("slider FEN should parse");
        assert!(is_square_attacked(&position, at("c4"), Color::Black));
        assert!(is_square_attacked(&position, at("d4"), Color::Black));
        assert!(!is_square_attacked(&position, at("e4"), Color::Black));
        assert!(!is_king_in_check(&position, Color::White));
    }

    #[test]
    fn queen_and_knight_checks_are_detected() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/q3K3 w - - 0 1")
            .expect("queen FEN should parse");
        assert!(is_king_in_check(&position, Color::White));

        let position = Position::from_fen("4k3/8/8/8/8/3n4/8/4K3 w - - 0 1")
            .expect("knight FEN should parse");
        assert!(is_king_in_check(&position, Color::White));
        assert!(!is_king_in_check(&position, Color::Black));
    }

    #[test]
    fn attackers_lists_every_checker() {
        // Rook on e8 and knight on d3 both give check to the king on e1.
        let position = Position::from_fen("k3r3/8/8/8/8/3n4/8/4K3 w - - 0 1")
            .expect("double check FEN should parse");
        let mut attackers = attackers_to_square(&position, at("e1"), Color::Black);
        attackers.sort();
        assert_eq!(
            attackers,
            vec![(at("e8"), PieceKind::Rook), (at("d3"), PieceKind::Knight)]
        );
    }
}
