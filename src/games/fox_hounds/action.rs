//! First-class move types for Fox and Hounds.
//!
//! A move is a domain event: who moves, from where, to where. It can be
//! validated against a position before anything is changed.

use super::coordinate::Coordinate;
use super::types::Figure;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A figure stepping from one cell to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub figure: Figure,
    /// Cell the piece leaves.
    pub origin: Coordinate,
    /// Cell the piece lands on.
    pub destination: Coordinate,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(figure: Figure, origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            figure,
            origin,
            destination,
        }
    }

    /// Lateral and vertical distance travelled.
    pub fn delta(&self) -> (i32, i32) {
        (
            self.destination.lateral - self.origin.lateral,
            self.destination.vertical - self.origin.vertical,
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.figure, self.origin, self.destination)
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Another piece already stands on the destination.
    #[display("Square {} is already occupied", _0)]
    DestinationOccupied(Coordinate),

    /// No piece of the moving side stands on the origin.
    #[display("There is no {} on {}", _0, _1)]
    NotYourPiece(Figure, Coordinate),

    /// Destination lies off the board.
    #[display("Square {} is off the board", _0)]
    OutOfBounds(Coordinate),

    /// The step is not exactly one cell diagonally.
    #[display("{} -> {} is not a single diagonal step", _0, _1)]
    NotDiagonal(Coordinate, Coordinate),

    /// Hounds may only move towards the fox's home row.
    #[display("Hounds cannot move backwards ({} -> {})", _0, _1)]
    NotForward(Coordinate, Coordinate),

    /// It is the other side's turn.
    #[display("{} cannot move out of turn", _0)]
    WrongTurn(Figure),

    /// The game has already been won.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
