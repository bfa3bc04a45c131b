//! First-class invariants for Fox and Hounds.
//!
//! Invariants are logical properties that must hold after every move and
//! every restore. They are testable independently and double as
//! documentation of what a position list guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose as types.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod distinct_positions;
pub mod piece_count;
pub mod pieces_on_board;

pub use distinct_positions::DistinctPositionsInvariant;
pub use piece_count::PieceCountInvariant;
pub use pieces_on_board::PiecesOnBoardInvariant;

/// All Fox and Hounds invariants as a composable set.
pub type FoxHoundsInvariants = (
    DistinctPositionsInvariant,
    PieceCountInvariant,
    PiecesOnBoardInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::fox_hounds::{Coordinate, Dimension, Game, Positions};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        for dim in 4..=26 {
            let game = Game::new(Dimension::new(dim).unwrap());
            assert!(FoxHoundsInvariants::check_all(&game).is_ok(), "dimension {}", dim);
        }
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = Game::new(Dimension::default());
        game.positions = Positions::from_vec(vec![Coordinate::new(0, 0), Coordinate::new(0, 0)])
            .unwrap();

        let violations = FoxHoundsInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new(Dimension::default());

        type TwoInvariants = (DistinctPositionsInvariant, PieceCountInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
