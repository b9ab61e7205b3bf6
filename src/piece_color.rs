use std::fmt;

/// Represents the color of a chess piece.
/// The color fixes the piece's orientation on the board: white advances
/// toward increasing ranks, black toward decreasing ranks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceColor {
    /// The black side.
    Black,
    /// The white side.
    White,
}

impl PieceColor {
    /// Sign of this color's forward direction along the rank axis.
    ///
    /// `+1` for white (forward is increasing rank), `-1` for black.
    #[inline]
    pub const fn forward_sign(self) -> i8 {
        match self {
            PieceColor::Black => -1,
            PieceColor::White => 1,
        }
    }

    /// Sign of this color's "left" direction along the file axis.
    ///
    /// Left is relative to the piece facing forward, so it is always the
    /// negation of `forward_sign`: `+1` for black (left is increasing file),
    /// `-1` for white.
    #[inline]
    pub const fn left_sign(self) -> i8 {
        match self {
            PieceColor::Black => 1,
            PieceColor::White => -1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::Black => PieceColor::White,
            PieceColor::White => PieceColor::Black,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::Black => write!(f, "BLACK"),
            PieceColor::White => write!(f, "WHITE"),
        }
    }
}
