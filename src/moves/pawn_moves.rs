//! Pawn move generation.
//!
//! Single and double advances, diagonal captures, en-passant captures onto
//! the current target square, and promotion flagging on the far row.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(position: &Position, from: Square, pawn: Piece, out: &mut Vec<Move>) {
    let side = pawn.color;
    let direction = side.pawn_direction();
    let board = position.board();

    if let Some(one_step) = from.offset(direction, 0) {
        if position.piece_at(one_step).is_none() {
            out.push(Move::new(from, one_step, pawn, board));

            if from.row == side.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if position.piece_at(two_step).is_none() {
                        out.push(Move::new(from, two_step, pawn, board));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(direction, d_col) else {
            continue;
        };

        match position.piece_at(to) {
            Some(target) if target.color != side => out.push(Move::new(from, to, pawn, board)),
            None if position.en_passant_target() == Some(to) => {
                out.push(Move::en_passant(from, to, pawn, board));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::moves::chess_move::Move;

    fn pawn_moves(fen: &str, from: Square) -> Vec<Move> {
        let position = Position::from_fen(fen).expect("pawn FEN should parse");
        let pawn = position.piece_at(from).expect("pawn should be on the start square");
        let mut out = Vec::new();
        generate_pawn_moves(&position, from, pawn, &mut out);
        out
    }

    fn notations(moves: &[Move]) -> Vec<String> {
        moves.iter().map(|mv| mv.to_coordinate_notation()).collect()
    }

    #[test]
    fn start_row_pawn_may_advance_one_or_two() {
        let moves = pawn_moves(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            Square::new(6, 4),
        );
        assert_eq!(notations(&moves), vec!["e2e3", "e2e4"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", Square::new(6, 4));
        assert!(moves.is_empty());

        let moves = pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", Square::new(6, 4));
        assert_eq!(notations(&moves), vec!["e2e3"]);
    }

    #[test]
    fn edge_pawn_captures_do_not_wrap() {
        // Black pawn on h6 would be "adjacent" to a7 only by wraparound.
        let moves = pawn_moves("4k3/8/1p5p/P7/8/8/8/4K3 w - - 0 1", Square::new(3, 0));
        assert_eq!(notations(&moves), vec!["a5a6", "a5b6"]);
    }

    #[test]
    fn en_passant_capture_is_flagged() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", Square::new(3, 4));
        let ep = moves
            .iter()
            .find(|mv| mv.is_en_passant)
            .expect("en passant capture should be generated");
        assert_eq!(ep.to_coordinate_notation(), "e5d6");
        assert_eq!(ep.piece_captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn black_pawn_promotes_on_row_seven() {
        let moves = pawn_moves("4k3/8/8/8/8/8/p7/1N2K3 b - - 0 1", Square::new(6, 0));
        assert_eq!(notations(&moves), vec!["a2a1", "a2b1"]);
        assert!(moves.iter().all(|mv| mv.is_pawn_promotion));
    }
}
