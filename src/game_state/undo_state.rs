use crate::game_state::chess_types::*;

/// History entry pushed by `Position::apply` and popped by `Position::reverse`.
///
/// Holds the state a move overwrites and cannot be recomputed from the move
/// record alone. The stack depth always equals the move log length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
}
