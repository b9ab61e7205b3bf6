//! Crate root module declarations for the pawn movement validator.
//!
//! This file exposes the board model, piece types, movement rules, and
//! coordinate utilities so tests, benches, and external tooling can import
//! stable module paths.

pub mod board;
pub mod board_location;
pub mod chess_errors;
pub mod movement_type;
pub mod pawn;
pub mod piece_color;

pub mod utils {
    pub mod algebraic;
}
