//! Perft: exhaustive legal-move tree walk for validating the generator.
//!
//! Uses the same make/unmake path as play, so a node count that matches the
//! published tables also vouches for `apply`/`reverse` symmetry.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::attackers_to_square;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub double_checks: usize,
    pub checkmates: usize,
}

/// Count leaf nodes `depth` plies below `position`, which is left unchanged.
pub fn perft(position: &mut Position, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    perft_recurse(position, depth, &mut counts);
    counts
}

/// Per-root-move node counts, sorted by coordinate notation.
pub fn perft_divide(position: &mut Position, depth: u8) -> Vec<(String, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut out: Vec<(String, usize)> = generate_legal_moves(position)
        .moves
        .into_iter()
        .map(|mv| {
            position.apply(mv);
            let nodes = perft(position, depth - 1).nodes;
            position.reverse();
            (mv.to_coordinate_notation(), nodes)
        })
        .collect();
    out.sort();
    out
}

fn perft_recurse(position: &mut Position, depth: u8, counts: &mut PerftCounts) {
    let moves = generate_legal_moves(position).moves;

    for mv in moves {
        position.apply(mv);
        if depth == 1 {
            tally_leaf(position, &mv, counts);
        } else {
            perft_recurse(position, depth - 1, counts);
        }
        position.reverse();
    }
}

/// Classify the leaf reached by `mv`, which is currently applied.
fn tally_leaf(position: &mut Position, mv: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castling {
        counts.castles += 1;
    }
    if mv.is_pawn_promotion {
        counts.promotions += 1;
    }

    let defender = position.side_to_move();
    let checkers = attackers_to_square(position, position.king_square(defender), defender.opposite());
    if checkers.is_empty() {
        return;
    }

    counts.checks += 1;
    if checkers.len() >= 2 {
        counts.double_checks += 1;
    }
    if generate_legal_moves(position).status == GameStatus::Checkmate {
        counts.checkmates += 1;
    }
}
