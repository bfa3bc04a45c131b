//! Move legality and piece relocation.

use super::super::{Coordinate, Dimension, Figure, MoveError, Positions};
use tracing::{instrument, trace};

/// Explains why a move is illegal, checking in rule order.
///
/// 1. The destination must be empty (no captures, no stacking).
/// 2. The origin must hold a piece of `figure`.
/// 3. The destination must be on the board.
/// 4. The step must be one cell diagonally; hounds must also move forward.
///
/// # Errors
///
/// Returns the first rule the move breaks.
#[instrument(skip(positions))]
pub fn check_move(
    dimension: Dimension,
    positions: &Positions,
    figure: Figure,
    origin: Coordinate,
    destination: Coordinate,
) -> Result<(), MoveError> {
    if positions.contains(destination) {
        return Err(MoveError::DestinationOccupied(destination));
    }

    let owns_origin = match figure {
        Figure::Fox => positions.fox() == origin,
        Figure::Hound => positions.is_hound(origin),
    };
    if !owns_origin {
        return Err(MoveError::NotYourPiece(figure, origin));
    }

    if !destination.is_on_board(dimension) {
        return Err(MoveError::OutOfBounds(destination));
    }

    let d_lateral = destination.lateral - origin.lateral;
    let d_vertical = destination.vertical - origin.vertical;
    if d_lateral.abs() != 1 || d_vertical.abs() != 1 {
        return Err(MoveError::NotDiagonal(origin, destination));
    }

    if figure == Figure::Hound && d_vertical != 1 {
        return Err(MoveError::NotForward(origin, destination));
    }

    Ok(())
}

/// True if `figure` may step from `origin` to `destination`.
#[instrument(skip(positions))]
pub fn is_valid_move(
    dimension: Dimension,
    positions: &Positions,
    figure: Figure,
    origin: Coordinate,
    destination: Coordinate,
) -> bool {
    let verdict = check_move(dimension, positions, figure, origin, destination);
    trace!(?verdict, "Move checked");
    verdict.is_ok()
}

/// Moves the piece on `origin` to `destination`.
///
/// Takes the list by value and hands it back. Performs no legality check;
/// if nothing stands on `origin` the list comes back unchanged.
#[instrument(skip(positions))]
pub fn apply_move(
    mut positions: Positions,
    origin: Coordinate,
    destination: Coordinate,
) -> Positions {
    match positions.piece_at_mut(origin) {
        Some(piece) => *piece = destination,
        None => trace!("No piece on origin, nothing moved"),
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::fox_hounds::initial_positions;

    fn c(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    fn board(text: &str) -> Positions {
        Positions::from_vec(text.split(' ').map(c).collect()).unwrap()
    }

    #[test]
    fn test_fox_diagonal_step() {
        let positions = initial_positions(8).unwrap();
        let dim = Dimension::default();
        assert!(is_valid_move(dim, &positions, Figure::Fox, c("E8"), c("D7")));
        assert!(is_valid_move(dim, &positions, Figure::Fox, c("E8"), c("F7")));
        assert!(!is_valid_move(dim, &positions, Figure::Fox, c("E8"), c("E7")));
        assert!(!is_valid_move(dim, &positions, Figure::Fox, c("E8"), c("C6")));
    }

    #[test]
    fn test_fox_moves_in_all_four_directions() {
        let positions = board("B1 D1 F1 H1 D4");
        let dim = Dimension::default();
        for dest in ["C3", "E3", "C5", "E5"] {
            assert!(is_valid_move(dim, &positions, Figure::Fox, c("D4"), c(dest)), "{}", dest);
        }
    }

    #[test]
    fn test_fox_off_board() {
        let positions = initial_positions(8).unwrap();
        let dim = Dimension::default();
        assert_eq!(
            check_move(dim, &positions, Figure::Fox, c("E8"), c("F9")),
            Err(MoveError::OutOfBounds(c("F9")))
        );
        let corner = board("B1 D1 F1 H1 A5");
        assert!(!is_valid_move(dim, &corner, Figure::Fox, c("A5"), Coordinate::new(0, 4)));
    }

    #[test]
    fn test_fox_must_move_from_its_own_cell() {
        let positions = initial_positions(8).unwrap();
        let dim = Dimension::default();
        assert_eq!(
            check_move(dim, &positions, Figure::Fox, c("B1"), c("C2")),
            Err(MoveError::NotYourPiece(Figure::Fox, c("B1")))
        );
    }

    #[test]
    fn test_hound_forward_only() {
        let positions = board("B1 D1 F1 C4 E8");
        let dim = Dimension::default();
        assert!(is_valid_move(dim, &positions, Figure::Hound, c("B1"), c("A2")));
        assert!(is_valid_move(dim, &positions, Figure::Hound, c("B1"), c("C2")));
        assert_eq!(
            check_move(dim, &positions, Figure::Hound, c("C4"), c("D3")),
            Err(MoveError::NotForward(c("C4"), c("D3")))
        );
        assert!(!is_valid_move(dim, &positions, Figure::Hound, c("B1"), c("B2")));
    }

    #[test]
    fn test_hound_cannot_move_the_fox() {
        let positions = initial_positions(8).unwrap();
        let dim = Dimension::default();
        assert!(!is_valid_move(dim, &positions, Figure::Hound, c("E8"), c("D9")));
        assert!(!is_valid_move(dim, &positions, Figure::Fox, c("B1"), c("C2")));
    }

    #[test]
    fn test_occupied_destination_rejected_for_everyone() {
        let positions = board("B1 D1 F1 H1 C2");
        let dim = Dimension::default();
        assert_eq!(
            check_move(dim, &positions, Figure::Hound, c("B1"), c("C2")),
            Err(MoveError::DestinationOccupied(c("C2")))
        );
        assert!(!is_valid_move(dim, &positions, Figure::Fox, c("C2"), c("B1")));
        assert!(!is_valid_move(dim, &positions, Figure::Fox, c("C2"), c("D1")));
    }

    #[test]
    fn test_apply_move_relocates_piece() {
        let positions = initial_positions(8).unwrap();
        let moved = apply_move(positions, c("E8"), c("D7"));
        assert_eq!(moved.to_string(), "B1 D1 F1 H1 D7");
        let moved = apply_move(moved, c("D1"), c("E2"));
        assert_eq!(moved.to_string(), "B1 E2 F1 H1 D7");
    }

    #[test]
    fn test_apply_move_without_piece_is_noop() {
        let positions = initial_positions(8).unwrap();
        let unchanged = apply_move(positions.clone(), c("A5"), c("B6"));
        assert_eq!(unchanged, positions);
    }
}
