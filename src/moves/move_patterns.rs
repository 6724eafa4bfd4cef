//! Shared step and ray walkers used by the per-piece generators.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

/// One move per on-board offset that does not land on an ally.
pub fn push_step_moves(
    position: &Position,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match position.piece_at(to) {
            Some(occupant) if occupant.color == piece.color => {}
            _ => out.push(Move::new(from, to, piece, position.board())),
        }
    }
}

/// Slide along each direction until the edge or the first occupied square,
/// which is included only when it holds an enemy piece.
pub fn push_ray_moves(
    position: &Position,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match position.piece_at(to) {
                None => out.push(Move::new(from, to, piece, position.board())),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        out.push(Move::new(from, to, piece, position.board()));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
