//! Win detection logic for Fox and Hounds.

use super::super::{Dimension, Figure, Positions};
use super::movement::is_valid_move;
use tracing::{debug, instrument};

/// True once the fox has reached row 1, the hounds' home row.
#[instrument(skip(positions))]
pub fn is_fox_win(positions: &Positions) -> bool {
    positions.fox().vertical == 1
}

/// True when the fox has no legal move left.
///
/// Every diagonal neighbour of the fox is either off the board or occupied.
#[instrument(skip(positions))]
pub fn is_hound_win(dimension: Dimension, positions: &Positions) -> bool {
    let fox = positions.fox();
    !fox
        .diagonals()
        .into_iter()
        .any(|dest| is_valid_move(dimension, positions, Figure::Fox, fox, dest))
}

/// Returns the winning side, if any.
///
/// The fox is checked first, so a fox on row 1 wins even if it is also
/// boxed in.
#[instrument(skip(positions))]
pub fn winner(positions: &Positions, dimension: Dimension) -> Option<Figure> {
    let winner = if is_fox_win(positions) {
        Some(Figure::Fox)
    } else if is_hound_win(dimension, positions) {
        Some(Figure::Hound)
    } else {
        None
    };
    if let Some(figure) = winner {
        debug!(%figure, "Winner found");
    }
    winner
}

/// True if either side has won.
#[instrument(skip(positions))]
pub fn is_winner(positions: &Positions, dimension: Dimension) -> bool {
    winner(positions, dimension).is_some()
}
