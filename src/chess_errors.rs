//! Errors used throughout the movement validator.
//!
//! The enum `ChessErrors` is the single error type across the crate to
//! simplify propagation and matching. Each variant carries contextual
//! information where appropriate to aid diagnostics.
//!
//! Usage guidelines:
//! - Functions should return `Result<..., ChessErrors>` for expected failure
//!   modes (out-of-grid coordinates, illegal moves, bad algebraic input).
//! - `IllegalMove` is an expected domain outcome, not a bug: the piece's
//!   coordinate is guaranteed unchanged when it is returned.

use crate::{board_location::BoardLocation, movement_type::MovementType};

/// Unified error type for the movement validator.
#[derive(Debug)]
pub enum ChessErrors {
    /// Generic failure used in tests or as a catch-all when no more specific
    /// variant applies.
    FailedTest,

    /// A coordinate outside the 8x8 grid was handed to the board.
    ///
    /// Payload: the offending location.
    OutOfBounds(BoardLocation),

    /// A movement was requested for a piece that has never been placed on a
    /// board, so there is no origin square to validate against.
    PieceNotOnBoard,

    /// The proposed displacement violates the piece's movement rules.
    ///
    /// The piece's coordinate is left unchanged when this is returned.
    IllegalMove {
        movement: MovementType,
        from: BoardLocation,
        to: BoardLocation,
    },

    /// A single character used during algebraic parsing was invalid (a file
    /// outside 'a'..'h' or a rank outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a square.
    ///
    /// Payload: the original string that could not be interpreted.
    InvalidAlgebraicString(String),
}
