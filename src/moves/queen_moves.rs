use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::generate_rook_moves;

/// Queen movement is the union of rook and bishop rays from the same square.
pub fn generate_queen_moves(position: &Position, from: Square, queen: Piece, out: &mut Vec<Move>) {
    generate_rook_moves(position, from, queen, out);
    generate_bishop_moves(position, from, queen, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;

    #[test]
    fn queen_in_the_corner_covers_rank_file_and_diagonal() {
        let position = Position::from_fen("7k/8/8/8/8/8/6K1/Q7 w - - 0 1")
            .expect("queen FEN should parse");
        let queen = Piece::new(Color::White, PieceKind::Queen);
        let mut out = Vec::new();
        generate_queen_moves(&position, Square::new(7, 0), queen, &mut out);
        // a-file, first rank, and the long diagonal ending in a capture on h8.
        assert_eq!(out.len(), 7 + 7 + 7);
        assert!(out.iter().any(|mv| mv.piece_captured.is_some_and(|p| p.kind == PieceKind::King)));
        assert!(out.iter().all(|mv| mv.piece_moved == queen));
    }
}
