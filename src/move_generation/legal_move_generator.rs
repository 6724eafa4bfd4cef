//! Full legal move generation pipeline.
//!
//! Composes pseudo-legal generation with castling, then filters by
//! simulation: apply each candidate, ask whether the mover's king is now
//! attacked, and reverse before trying the next one. Apply and reverse strictly
//! alternate, so the single board and history stacks are never two moves deep
//! inside the filter.

use log::debug;

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::generate_castling_moves;

/// Legal moves for the side to move together with the terminal status they imply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalMoves {
    pub moves: Vec<Move>,
    pub status: GameStatus,
}

pub fn generate_legal_moves(position: &mut Position) -> LegalMoves {
    let side = position.side_to_move();

    let mut pseudo = generate_pseudo_legal_moves(position, side);
    generate_castling_moves(position, side, &mut pseudo);

    let moves = filter_to_legal(position, pseudo);

    let status = if !moves.is_empty() {
        GameStatus::InProgress
    } else if is_king_in_check(position, side) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    };

    if status != GameStatus::InProgress {
        debug!(
            "{status:?} with {side:?} to move after {} plies",
            position.move_log().len()
        );
    }

    LegalMoves { moves, status }
}

/// Keep only candidates that do not leave the mover's king attacked.
///
/// The position is restored exactly before this returns.
pub fn filter_to_legal(position: &mut Position, candidates: Vec<Move>) -> Vec<Move> {
    let mover = position.side_to_move();

    candidates
        .into_iter()
        .filter(|&mv| {
            position.apply(mv);
            let king_safe = !is_king_in_check(position, mover);
            position.reverse();
            king_safe
        })
        .collect()
}
