//! The 8x8 board model.
//!
//! `ChessBoard` associates pieces with coordinates. It owns the bounds
//! contract: a placement outside the grid is rejected with an explicit
//! error rather than clamped or silently accepted. It does not enforce
//! square uniqueness; occupancy rules belong to a higher layer.

use crate::board_location::{is_legal_board_location, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::pawn::Pawn;

/// An 8x8 board that records every coordinate assignment it has made.
#[derive(Clone, Debug, Default)]
pub struct ChessBoard {
    placements: Vec<BoardLocation>,
}

impl ChessBoard {
    pub fn new() -> Self {
        ChessBoard {
            placements: Vec::new(),
        }
    }

    /// Places `piece` at `(file, rank)`, setting the piece's coordinate.
    ///
    /// Returns `ChessErrors::OutOfBounds` for coordinates off the grid and
    /// leaves the piece unplaced in that case.
    pub fn add(&mut self, piece: &mut Pawn, file: i8, rank: i8) -> Result<(), ChessErrors> {
        let location: BoardLocation = (file, rank);
        if !is_legal_board_location(&location) {
            return Err(ChessErrors::OutOfBounds(location));
        }
        piece.set_location(location);
        self.placements.push(location);
        Ok(())
    }

    /// Coordinates assigned so far, in placement order.
    pub fn placements(&self) -> &[BoardLocation] {
        &self.placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_color::PieceColor;

    #[test]
    fn add_sets_file_coordinate() -> Result<(), ChessErrors> {
        let mut board = ChessBoard::new();
        let mut pawn = Pawn::new(PieceColor::Black);
        board.add(&mut pawn, 6, 3)?;
        assert_eq!(pawn.location().map(|loc| loc.0), Some(6));
        Ok(())
    }

    #[test]
    fn add_sets_rank_coordinate() -> Result<(), ChessErrors> {
        let mut board = ChessBoard::new();
        let mut pawn = Pawn::new(PieceColor::Black);
        board.add(&mut pawn, 6, 3)?;
        assert_eq!(pawn.location().map(|loc| loc.1), Some(3));
        Ok(())
    }

    #[test]
    fn add_records_each_placement() -> Result<(), ChessErrors> {
        let mut board = ChessBoard::new();
        let mut first = Pawn::new(PieceColor::White);
        let mut second = Pawn::new(PieceColor::Black);
        board.add(&mut first, 0, 1)?;
        board.add(&mut second, 4, 6)?;
        assert_eq!(board.placements(), &[(0, 1), (4, 6)]);
        Ok(())
    }

    #[test]
    fn add_outside_the_grid_is_rejected() {
        let mut board = ChessBoard::new();
        let mut pawn = Pawn::new(PieceColor::White);
        for (file, rank) in [(-1, 0), (0, -1), (8, 0), (0, 8)] {
            assert!(matches!(
                board.add(&mut pawn, file, rank),
                Err(ChessErrors::OutOfBounds(_))
            ));
        }
        assert_eq!(pawn.location(), None);
        assert!(board.placements().is_empty());
    }
}
