use crate::chess_errors::ChessErrors;

/// A board coordinate as a `(file, rank)` pair, each component in `0..=7`
/// once a piece has been legally placed.
pub type BoardLocation = (i8, i8);

/// Number of files on the board.
pub const BOARD_WIDTH: i8 = 8;
/// Number of ranks on the board.
pub const BOARD_HEIGHT: i8 = 8;

/// Returns true if the location lies on the 8x8 grid.
#[inline]
pub fn is_legal_board_location(x: &BoardLocation) -> bool {
    (x.0 >= 0) & (x.0 < BOARD_WIDTH) & (x.1 >= 0) & (x.1 < BOARD_HEIGHT)
}

/// Moves a board location by a specified file and rank offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_file` - The file offset.
/// * `d_rank` - The rank offset.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - Returns the new board location if
///   within bounds, otherwise returns an error.
pub fn move_board_location(
    x: &BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_file, x.1 + d_rank);
    if is_legal_board_location(&y) {
        Ok(y)
    } else {
        Err(ChessErrors::OutOfBounds(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_legal() {
        assert!(is_legal_board_location(&(0, 0)));
        assert!(is_legal_board_location(&(7, 7)));
        assert!(is_legal_board_location(&(0, 7)));
        assert!(is_legal_board_location(&(7, 0)));
    }

    #[test]
    fn off_grid_locations_are_illegal() {
        assert!(!is_legal_board_location(&(-1, 3)));
        assert!(!is_legal_board_location(&(3, -1)));
        assert!(!is_legal_board_location(&(8, 3)));
        assert!(!is_legal_board_location(&(3, 8)));
    }

    #[test]
    fn move_within_bounds_succeeds() -> Result<(), ChessErrors> {
        let from: BoardLocation = (4, 4);
        assert_eq!(move_board_location(&from, 1, -1)?, (5, 3));
        assert_eq!(move_board_location(&from, -4, 3)?, (0, 7));
        Ok(())
    }

    #[test]
    fn move_off_the_board_is_rejected() {
        let from: BoardLocation = (7, 7);
        assert!(matches!(
            move_board_location(&from, 1, 0),
            Err(ChessErrors::OutOfBounds((8, 7)))
        ));
        assert!(matches!(
            move_board_location(&(0, 0), 0, -1),
            Err(ChessErrors::OutOfBounds((0, -1)))
        ));
    }
}
