//! Crate root module declarations for the chess rules core.
//!
//! Exposes the board model, per-piece move patterns, legality filtering, and
//! the FEN/rendering helpers so the CLI, benches, and host applications can
//! import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_patterns;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub use errors::{ChessError, ChessResult};
pub use game_state::game_state::{GameState, GameStatus};
pub use moves::chess_move::Move;
