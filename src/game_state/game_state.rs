//! Public game facade.
//!
//! `GameState` is what a host application holds: a `Position` plus the
//! terminal status derived by the most recent `legal_moves` call. Every
//! operation takes the game explicitly, so independent games never share
//! state.

use log::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Terminal classification of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Checkmate,
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    position: Position,
    status: GameStatus,
}

impl GameState {
    /// Standard starting position, White to move.
    #[inline]
    pub fn new_game() -> Self {
        Self::from_position(Position::new_game())
    }

    #[inline]
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    #[inline]
    pub fn fen(&self) -> String {
        self.position.fen()
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        self.position.move_log()
    }

    /// Legal moves for the side to move. Also refreshes the terminal status.
    ///
    /// Any list obtained earlier is stale once a move is applied or undone.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let legal = generate_legal_moves(&mut self.position);
        self.status = legal.status;
        legal.moves
    }

    /// Play `mv`, which must come from the latest `legal_moves` result.
    ///
    /// Membership is not checked; passing anything else corrupts the game.
    pub fn apply_move(&mut self, mv: Move) {
        self.position.apply(mv);
        self.status = GameStatus::InProgress;
    }

    /// Take back the last move. Does nothing at the start of the game.
    pub fn undo_move(&mut self) {
        if self.position.move_log().is_empty() {
            debug!("undo requested with an empty move log");
            return;
        }
        self.position.reverse();
        self.status = GameStatus::InProgress;
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.status == GameStatus::Checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.status == GameStatus::Stalemate
    }

    /// Whether the side to move is currently in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_in_check(&self.position, self.position.side_to_move())
    }

    /// Read-only board access for rendering. `row` and `col` must be in `0..8`.
    #[inline]
    pub fn square_contents(&self, row: u8, col: u8) -> Option<Piece> {
        self.position.piece_at(Square::new(row, col))
    }

    /// The legal move from `start` to `end`, if there is one.
    pub fn find_legal_move(&mut self, start: Square, end: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.start == start && mv.end == end)
    }

    /// Parse `"e2e4"`-style text, match it against the legal moves, and play it.
    pub fn play_coordinate_move(&mut self, text: &str) -> ChessResult<Move> {
        let text = text.trim();
        if text.len() != 4 || !text.is_ascii() {
            return Err(ChessError::IllegalMove(text.to_owned()));
        }

        let start = algebraic_to_square(&text[0..2])?;
        let end = algebraic_to_square(&text[2..4])?;
        let mv = self
            .find_legal_move(start, end)
            .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))?;

        self.apply_move(mv);
        Ok(mv)
    }
}
