use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::moves::move_patterns::push_ray_moves;

pub fn generate_bishop_moves(position: &Position, from: Square, bishop: Piece, out: &mut Vec<Move>) {
    push_ray_moves(position, from, bishop, &BISHOP_DIRECTIONS, out);
}
