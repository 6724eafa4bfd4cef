//! Square labels in file/rank form.
//!
//! Files `a..h` map to columns 0..7 left to right; ranks `1..8` map to rows
//! 7..0 bottom to top.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert a square label (for example: "e4") to a board coordinate.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a board coordinate to its label (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'8' - square.row);
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::new(7, 0));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::new(0, 7));
        assert_eq!(square_to_algebraic(Square::new(7, 0)), "a1");
        assert_eq!(square_to_algebraic(Square::new(0, 7)), "h8");
    }

    #[test]
    fn e2_and_e4_match_the_board_convention() {
        assert_eq!(algebraic_to_square("e2").expect("e2 should parse"), Square::new(6, 4));
        assert_eq!(square_to_algebraic(Square::new(4, 4)), "e4");
    }

    #[test]
    fn malformed_labels_are_rejected() {
        for bad in ["", "e", "e9", "i1", "E2", "e22"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidSquare(bad.to_owned()))
            );
        }
    }
}
