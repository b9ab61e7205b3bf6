//! Conversions between algebraic coordinates and board locations.
//!
//! Converts between human-readable squares (e.g., `e4`) and the internal
//! `(file, rank)` representation used by the board and pieces.

use crate::board_location::{is_legal_board_location, BoardLocation};
use crate::chess_errors::ChessErrors;

/// Convert algebraic notation (for example: "e4") to a board location.
#[inline]
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Ok(((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert a board location to algebraic notation (for example: "e4").
#[inline]
pub fn location_to_algebraic(location: &BoardLocation) -> Result<String, ChessErrors> {
    if !is_legal_board_location(location) {
        return Err(ChessErrors::OutOfBounds(*location));
    }

    let file_char = char::from(b'a' + location.0 as u8);
    let rank_char = char::from(b'1' + location.1 as u8);
    Ok(format!("{file_char}{rank_char}"))
}
