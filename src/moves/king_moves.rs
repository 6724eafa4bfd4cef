//! King steps and castling.
//!
//! Castling is not part of the per-square dispatch; the legal generator
//! appends it separately through `generate_castling_moves`.

use std::ops::Range;

use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::chess_move::Move;
use crate::moves::move_patterns::push_step_moves;

pub fn generate_king_moves(position: &Position, from: Square, king: Piece, out: &mut Vec<Move>) {
    push_step_moves(position, from, king, &KING_OFFSETS, out);
}

/// Append castle moves for `side`, reading its king location at call time.
///
/// Requires the right, the king on its home square, the rook on its corner,
/// an empty corridor, and no attack on the king's square or the two squares
/// it crosses. The queenside b-file square must be empty but may be attacked.
pub fn generate_castling_moves(position: &Position, side: Color, out: &mut Vec<Move>) {
    let rights = position.castling_rights();
    if !rights.kingside(side) && !rights.queenside(side) {
        return;
    }

    let king_from = position.king_square(side);
    if king_from != Square::new(side.back_row(), KING_HOME_COL) {
        return;
    }

    let enemy = side.opposite();

    // Cannot castle out of check.
    if is_square_attacked(position, king_from, enemy) {
        return;
    }

    let king = Piece::new(side, PieceKind::King);
    let row = king_from.row;

    if rights.kingside(side)
        && rook_on_corner(position, side, KINGSIDE_ROOK_COL)
        && corridor_is_empty(position, row, KING_HOME_COL + 1..KINGSIDE_ROOK_COL)
        && !is_square_attacked(position, Square::new(row, KING_HOME_COL + 1), enemy)
        && !is_square_attacked(position, Square::new(row, KING_HOME_COL + 2), enemy)
    {
        out.push(Move::castling(
            king_from,
            Square::new(row, KING_HOME_COL + 2),
            king,
            position.board(),
        ));
    }

    if rights.queenside(side)
        && rook_on_corner(position, side, QUEENSIDE_ROOK_COL)
        && corridor_is_empty(position, row, QUEENSIDE_ROOK_COL + 1..KING_HOME_COL)
        && !is_square_attacked(position, Square::new(row, KING_HOME_COL - 1), enemy)
        && !is_square_attacked(position, Square::new(row, KING_HOME_COL - 2), enemy)
    {
        out.push(Move::castling(
            king_from,
            Square::new(row, KING_HOME_COL - 2),
            king,
            position.board(),
        ));
    }
}

fn rook_on_corner(position: &Position, side: Color, col: u8) -> bool {
    position.piece_at(Square::new(side.back_row(), col)) == Some(Piece::new(side, PieceKind::Rook))
}

fn corridor_is_empty(position: &Position, row: u8, mut cols: Range<u8>) -> bool {
    cols.all(|col| position.piece_at(Square::new(row, col)).is_none())
}

#[cfg(test)]
mod tests {
    use super::{generate_castling_moves, generate_king_moves};
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::moves::chess_move::Move;

    fn castles(fen: &str) -> Vec<String> {
        let position = Position::from_fen(fen).expect("castling FEN should parse");
        let mut out: Vec<Move> = Vec::new();
        generate_castling_moves(&position, position.side_to_move(), &mut out);
        assert!(out.iter().all(|mv| mv.is_castling));
        out.iter().map(|mv| mv.to_coordinate_notation()).collect()
    }

    #[test]
    fn both_castles_available_with_clear_corridors() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec!["e1g1", "e1c1"]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), vec!["e8g8", "e8c8"]);
    }

    #[test]
    fn revoked_right_suppresses_that_wing_only() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/4K2R w Kkq - 0 1"), vec!["e1g1"]);
    }

    #[test]
    fn attacked_transit_or_landing_square_blocks_kingside() {
        // f1 attacked by the f8 rook.
        assert_eq!(castles("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1"), vec!["e1c1"]);
        // g1 attacked by the g8 rook.
        assert_eq!(castles("r3k1r1/8/8/8/8/8/8/R3K2R w KQq - 0 1"), vec!["e1c1"]);
    }

    #[test]
    fn attacked_b1_does_not_block_queenside() {
        assert_eq!(castles("1r2k2r/8/8/8/8/8/8/R3K2R w KQk - 0 1"), vec!["e1g1", "e1c1"]);
    }

    #[test]
    fn no_castling_out_of_check_or_through_pieces() {
        assert!(castles("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1").is_empty());
        assert!(castles("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1").is_empty());
    }

    #[test]
    fn lone_king_in_the_middle_has_eight_steps() {
        let position = Position::from_fen("4k3/8/8/8/3K4/8/8/8 w - - 0 1")
            .expect("king FEN should parse");
        let king = Piece::new(Color::White, PieceKind::King);
        let mut out = Vec::new();
        generate_king_moves(&position, Square::new(4, 3), king, &mut out);
        assert_eq!(out.len(), 8);
    }
}
