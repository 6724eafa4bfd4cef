//! Pseudo-legal move generation.
//!
//! Scans the side's pieces in row-major order and dispatches on the piece
//! kind. The result ignores own-king safety and omits castling, which the
//! legal generator appends on its own.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

pub fn generate_pseudo_legal_moves(position: &Position, side: Color) -> Vec<Move> {
    let mut out = Vec::<Move>::with_capacity(64);

    for (from, piece) in position.pieces_of(side) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(position, from, piece, &mut out),
            PieceKind::Knight => generate_knight_moves(position, from, piece, &mut out),
            PieceKind::Bishop => generate_bishop_moves(position, from, piece, &mut out),
            PieceKind::Rook => generate_rook_moves(position, from, piece, &mut out),
            PieceKind::Queen => generate_queen_moves(position, from, piece, &mut out),
            PieceKind::King => generate_king_moves(position, from, piece, &mut out),
        }
    }

    out
}
