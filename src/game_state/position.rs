//! Mutable board aggregate with reversible make/unmake.
//!
//! `Position` owns the mailbox board, side to move, both king locations,
//! castling rights, the en-passant target, and the two parallel stacks that
//! make `reverse` exact: the move log and the `UndoState` history. Every
//! `apply` pushes one entry onto each; every `reverse` pops one from each.
//!
//! `apply` performs no legality checks. Callers pass pseudo-legal moves
//! generated from this same position; anything else corrupts the board.

use log::trace;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    // [color]
    king_squares: [Square; 2],
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,

    // --- Make/unmake stacks, always the same depth ---
    move_log: Vec<Move>,
    undo_stack: Vec<UndoState>,
}

impl Position {
    /// Standard starting position, White to move, all castling rights held.
    pub fn new_game() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = EMPTY_BOARD;
        for col in 0..8 {
            board[0][col] = Some(Piece::new(Color::Black, BACK_RANK[col]));
            board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[7][col] = Some(Piece::new(Color::White, BACK_RANK[col]));
        }

        Self {
            board,
            side_to_move: Color::White,
            king_squares: [
                Square::new(Color::White.back_row(), KING_HOME_COL),
                Square::new(Color::Black.back_row(), KING_HOME_COL),
            ],
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            move_log: Vec::new(),
            undo_stack: Vec::new(),
        }
    }

    /// Build a position with an empty history from raw parts.
    ///
    /// Fails unless the board holds exactly one king of each color and any
    /// en-passant target is capturable by `side_to_move`.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> ChessResult<Self> {
        let king_squares = [
            locate_single_king(&board, Color::White)?,
            locate_single_king(&board, Color::Black)?,
        ];
        if let Some(target) = en_passant_target {
            check_en_passant_target(&board, side_to_move, target)?;
        }

        Ok(Self {
            board,
            side_to_move,
            king_squares,
            castling_rights,
            en_passant_target,
            move_log: Vec::new(),
            undo_stack: Vec::new(),
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Current location of `color`'s king, maintained by `apply`/`reverse`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        let square = self.king_squares[color.index()];
        debug_assert_eq!(
            self.piece_at(square),
            Some(Piece::new(color, PieceKind::King)),
            "king record for {color:?} does not point at its king"
        );
        square
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Every piece of `color` with its square, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board.iter().enumerate().flat_map(move |(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| match cell {
                Some(piece) if piece.color == color => {
                    Some((Square::new(row as u8, col as u8), *piece))
                }
                _ => None,
            })
        })
    }

    /// Execute `mv` unconditionally and record what `reverse` needs to undo it.
    pub fn apply(&mut self, mv: Move) {
        let mover = mv.piece_moved.color;

        self.set(mv.start, None);
        let placed = if mv.is_pawn_promotion {
            Piece::new(mover, PieceKind::Queen)
        } else {
            mv.piece_moved
        };
        self.set(mv.end, Some(placed));

        if mv.is_en_passant {
            // The captured pawn sits beside the start square, not on the end square.
            self.set(Square::new(mv.start.row, mv.end.col), None);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mover.index()] = mv.end;
        }

        if mv.is_castling {
            let (corner, castled) = castle_rook_squares(&mv);
            let rook = self.piece_at(corner);
            self.set(castled, rook);
            self.set(corner, None);
        }

        self.undo_stack.push(UndoState {
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
        });

        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
        } else {
            None
        };

        self.update_castling_rights(&mv);
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();

        trace!("apply {mv} (ply {})", self.move_log.len());
    }

    /// Undo the most recent `apply`. Does nothing when no move has been made.
    pub fn reverse(&mut self) {
        assert_eq!(
            self.move_log.len(),
            self.undo_stack.len(),
            "move log and undo history diverged"
        );

        let (Some(mv), Some(undo)) = (self.move_log.pop(), self.undo_stack.pop()) else {
            return;
        };

        self.set(mv.start, Some(mv.piece_moved));
        if mv.is_en_passant {
            self.set(mv.end, None);
            self.set(Square::new(mv.start.row, mv.end.col), mv.piece_captured);
            debug_assert_eq!(undo.prev_en_passant_target, Some(mv.end));
        } else {
            self.set(mv.end, mv.piece_captured);
        }

        if mv.is_castling {
            let (corner, castled) = castle_rook_squares(&mv);
            let rook = self.piece_at(castled);
            self.set(corner, rook);
            self.set(castled, None);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[mv.piece_moved.color.index()] = mv.start;
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_target = undo.prev_en_passant_target;
        self.side_to_move = self.side_to_move.opposite();

        trace!("reverse {mv} (ply {})", self.move_log.len());
    }

    /// Revoke rights lost by `mv`. Never grants; only `reverse` restores.
    fn update_castling_rights(&mut self, mv: &Move) {
        let mover = mv.piece_moved.color;
        match mv.piece_moved.kind {
            PieceKind::King => self.castling_rights.revoke_all(mover),
            PieceKind::Rook if mv.start.row == mover.back_row() => match mv.start.col {
                QUEENSIDE_ROOK_COL => self.castling_rights.revoke_queenside(mover),
                KINGSIDE_ROOK_COL => self.castling_rights.revoke_kingside(mover),
                _ => {}
            },
            _ => {}
        }

        // A rook taken on its corner can no longer castle.
        if let Some(captured) = mv.piece_captured {
            if captured.kind == PieceKind::Rook && mv.end.row == captured.color.back_row() {
                match mv.end.col {
                    QUEENSIDE_ROOK_COL => self.castling_rights.revoke_queenside(captured.color),
                    KINGSIDE_ROOK_COL => self.castling_rights.revoke_kingside(captured.color),
                    _ => {}
                }
            }
        }
    }

    #[inline]
    fn set(&mut self, square: Square, contents: Option<Piece>) {
        self.board[square.row as usize][square.col as usize] = contents;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Rook corner and castled square for the castle `mv`.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.start.row;
    if mv.is_kingside_castle() {
        (
            Square::new(row, KINGSIDE_ROOK_COL),
            Square::new(row, KINGSIDE_ROOK_CASTLED_COL),
        )
    } else {
        (
            Square::new(row, QUEENSIDE_ROOK_COL),
            Square::new(row, QUEENSIDE_ROOK_CASTLED_COL),
        )
    }
}

fn locate_single_king(board: &Board, color: Color) -> ChessResult<Square> {
    let king = Piece::new(color, PieceKind::King);
    let mut found = None;
    let mut count = 0usize;
    for (row, cells) in board.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if *cell == Some(king) {
                found = Some(Square::new(row as u8, col as u8));
                count += 1;
            }
        }
    }

    match (found, count) {
        (Some(square), 1) => Ok(square),
        _ => Err(ChessError::InvalidFen(format!(
            "expected exactly one {color:?} king, found {count}"
        ))),
    }
}

/// The target must sit on the mover's capture row, be empty, and have the
/// double-pushed enemy pawn directly beyond it.
fn check_en_passant_target(board: &Board, side_to_move: Color, target: Square) -> ChessResult<()> {
    let passed = side_to_move.opposite();
    let expected_row = (passed.pawn_start_row() as i8 + passed.pawn_direction()) as u8;
    let pawn_square = target.offset(passed.pawn_direction(), 0);

    let pawn_is_there = pawn_square.is_some_and(|square| {
        board[square.row as usize][square.col as usize] == Some(Piece::new(passed, PieceKind::Pawn))
    });

    if target.row != expected_row
        || board[target.row as usize][target.col as usize].is_some()
        || !pawn_is_there
    {
        return Err(ChessError::InvalidFen(format!(
            "en-passant target {}{} is not capturable by {side_to_move:?}",
            char::from(b'a' + target.col),
            char::from(b'8' - target.row)
        )));
    }
    Ok(())
}
