use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::utils::algebraic::square_to_algebraic;

/// Emit FEN for `position`. Clock fields are always `0 1`.
pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position.board());
    let side_to_move = match position.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights());
    let en_passant = position
        .en_passant_target()
        .map(square_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    format!("{board} {side_to_move} {castling} {en_passant} 0 1")
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, cells) in board.iter().enumerate() {
        let mut empty_count = 0u8;

        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(*piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights.white_kingside {
        out.push('K');
    }
    if rights.white_queenside {
        out.push('Q');
    }
    if rights.black_kingside {
        out.push('k');
    }
    if rights.black_queenside {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::moves::chess_move::Move;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_position_fen_is_reproduced() {
        assert_eq!(generate_fen(&Position::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn custom_position_survives_a_reparse() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 0 1";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        assert_eq!(generate_fen(&parsed), fen);
    }

    #[test]
    fn double_push_shows_up_as_en_passant_field() {
        let mut position = Position::new_game();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        position.apply(Move::new(Square::new(6, 4), Square::new(4, 4), pawn, position.board()));
        assert_eq!(
            generate_fen(&position),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }
}
