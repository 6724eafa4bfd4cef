use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::moves::move_patterns::push_step_moves;

pub fn generate_knight_moves(position: &Position, from: Square, knight: Piece, out: &mut Vec<Move>) {
    push_step_moves(position, from, knight, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;

    #[test]
    fn corner_knight_has_two_moves_and_skips_allies() {
        let position = Position::new_game();
        let knight = Piece::new(Color::White, PieceKind::Knight);
        let mut out = Vec::new();
        generate_knight_moves(&position, Square::new(7, 1), knight, &mut out);

        let targets: Vec<String> = out.iter().map(|mv| mv.to_coordinate_notation()).collect();
        assert_eq!(out.len(), 2);
        assert!(targets.contains(&"b1a3".to_owned()));
        assert!(targets.contains(&"b1c3".to_owned()));
    }

    #[test]
    fn centralized_knight_reaches_eight_squares() {
        let position = Position::from_fen("4k3/8/8/3N4/8/8/8/4K3 w - - 0 1")
            .expect("knight FEN should parse");
        let knight = Piece::new(Color::White, PieceKind::Knight);
        let mut out = Vec::new();
        generate_knight_moves(&position, Square::new(3, 3), knight, &mut out);
        assert_eq!(out.len(), 8);
    }
}
