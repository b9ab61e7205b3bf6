//! Pawn movement validation and application.
//!
//! A `Pawn` owns its color and its current board coordinate, and decides
//! legality of a proposed move or capture from its own geometry alone. It
//! does not know what occupies the destination square; occupancy rules
//! belong to a higher layer.

use std::fmt;

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::movement_type::MovementType;
use crate::piece_color::PieceColor;
use crate::utils::algebraic::location_to_algebraic;

/// Maximum number of pawns a side may field.
pub const MAX_PAWNS_PER_COLOR: u8 = 8;

/// A pawn with a fixed color and a mutable board coordinate.
///
/// Created without a position; `ChessBoard::add` sets the initial location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pawn {
    color: PieceColor,
    location: Option<BoardLocation>,
}

impl Pawn {
    pub fn new(color: PieceColor) -> Self {
        Pawn {
            color,
            location: None,
        }
    }

    #[inline]
    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// Current coordinate, `None` until placed on a board.
    #[inline]
    pub fn location(&self) -> Option<BoardLocation> {
        self.location
    }

    /// Sets the coordinate directly. Bounds checking is the board's job.
    pub(crate) fn set_location(&mut self, location: BoardLocation) {
        self.location = Some(location);
    }

    /// Converts an absolute destination rank into squares traveled in this
    /// pawn's forward direction.
    ///
    /// `+1` means exactly one square forward, negative values mean backward,
    /// and the magnitude scales with distance.
    pub fn relative_forward_ranks(&self, new_rank: i8) -> Result<i8, ChessErrors> {
        let (_, rank) = self.location.ok_or(ChessErrors::PieceNotOnBoard)?;
        Ok(self.color.forward_sign() * (new_rank - rank))
    }

    /// Converts an absolute destination file into squares traveled toward
    /// this pawn's left.
    ///
    /// Black's left is increasing file, white's left is decreasing file, so
    /// the same comparison logic serves both colors.
    pub fn relative_left_files(&self, new_file: i8) -> Result<i8, ChessErrors> {
        let (file, _) = self.location.ok_or(ChessErrors::PieceNotOnBoard)?;
        Ok(self.color.left_sign() * (new_file - file))
    }

    /// Validates a proposed movement and commits it if legal.
    ///
    /// A `Move` must be exactly one square straight forward; a `Capture`
    /// must be exactly one square diagonally forward. On an illegal
    /// displacement the coordinate is left untouched and
    /// `ChessErrors::IllegalMove` is returned.
    ///
    /// Destination occupancy is not inspected here; the rule set is purely
    /// geometric.
    pub fn try_move(
        &mut self,
        movement: MovementType,
        new_file: i8,
        new_rank: i8,
    ) -> Result<(), ChessErrors> {
        let from = self.location.ok_or(ChessErrors::PieceNotOnBoard)?;
        let forward = self.relative_forward_ranks(new_rank)?;
        let left = self.relative_left_files(new_file)?;

        let legal = match movement {
            MovementType::Move => (left == 0) & (forward == 1),
            MovementType::Capture => (left.abs() == 1) & (forward == 1),
        };

        if legal {
            self.location = Some((new_file, new_rank));
            Ok(())
        } else {
            Err(ChessErrors::IllegalMove {
                movement,
                from,
                to: (new_file, new_rank),
            })
        }
    }

    /// Maximum number of pawns a side may field. Independent of piece state.
    #[inline]
    pub const fn max_pieces_per_color() -> u8 {
        MAX_PAWNS_PER_COLOR
    }

    /// Single-character identifier: `'P'` for black, `'p'` for white.
    #[inline]
    pub const fn symbol(&self) -> char {
        match self.color {
            PieceColor::Black => 'P',
            PieceColor::White => 'p',
        }
    }
}

impl fmt::Display for Pawn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => {
                let square = location_to_algebraic(&location)
                    .unwrap_or_else(|_| "off-board".to_owned());
                write!(
                    f,
                    "{} Pawn on {} (file {}, rank {})",
                    self.color, square, location.0, location.1
                )
            }
            None => write!(f, "{} Pawn, not yet placed", self.color),
        }
    }
}
