//! Immutable move record.
//!
//! A `Move` captures everything `Position::reverse` needs to undo it: the
//! piece that moved, the piece it removed, and the three special-move flags.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub is_pawn_promotion: bool,
}

impl Move {
    /// Ordinary move or capture of `piece_moved`; the captured piece is read off `board`.
    pub fn new(start: Square, end: Square, piece_moved: Piece, board: &Board) -> Self {
        let is_pawn_promotion =
            piece_moved.kind == PieceKind::Pawn && end.row == piece_moved.color.promotion_row();
        Self {
            start,
            end,
            piece_moved,
            piece_captured: board[end.row as usize][end.col as usize],
            is_en_passant: false,
            is_castling: false,
            is_pawn_promotion,
        }
    }

    /// En-passant capture. The captured piece is the enemy pawn, not the empty end square.
    pub fn en_passant(start: Square, end: Square, piece_moved: Piece, board: &Board) -> Self {
        let mut mv = Self::new(start, end, piece_moved, board);
        mv.piece_captured = Some(Piece::new(
            mv.piece_moved.color.opposite(),
            PieceKind::Pawn,
        ));
        mv.is_en_passant = true;
        mv
    }

    /// King leg of a castle; the rook relocation is implied by `is_castling`.
    pub fn castling(start: Square, end: Square, piece_moved: Piece, board: &Board) -> Self {
        let mut mv = Self::new(start, end, piece_moved, board);
        mv.is_castling = true;
        mv
    }

    /// Compact key over the four coordinates, unique in `0..4096`.
    #[inline]
    pub fn move_id(&self) -> u16 {
        (self.start.index() * 64 + self.end.index()) as u16
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.start.row.abs_diff(self.end.row) == 2
    }

    #[inline]
    pub fn is_kingside_castle(&self) -> bool {
        self.is_castling && self.end.col > self.start.col
    }

    /// Start and end labels concatenated, e.g. `"e2e4"`.
    pub fn to_coordinate_notation(&self) -> String {
        let mut out = square_to_algebraic(self.start);
        out.push_str(&square_to_algebraic(self.end));
        out
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_coordinate_notation())
    }
}
