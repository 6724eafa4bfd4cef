use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::moves::move_patterns::push_ray_moves;

pub fn generate_rook_moves(position: &Position, from: Square, rook: Piece, out: &mut Vec<Move>) {
    push_ray_moves(position, from, rook, &ROOK_DIRECTIONS, out);
}
