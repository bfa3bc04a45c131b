//! Contract-based validation for Fox and Hounds.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::game::Game;
use super::invariants::{FoxHoundsInvariants, InvariantSet};
use super::rules::check_move;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: nobody has won yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once the status is terminal.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the moving side's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the side that is not on turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if mov.figure != game.turn() {
            Err(MoveError::WrongTurn(mov.figure))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the step obeys the movement rules.
pub struct LegalStep;

impl LegalStep {
    /// Runs the rules engine on the move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        check_move(
            game.dimension(),
            game.positions(),
            mov.figure,
            mov.origin,
            mov.destination,
        )
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - Must be the side's turn
/// - Step is legal
///
/// Postconditions:
/// - All pieces distinct, on the board, and the list length unchanged
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        PlayersTurn::check(action, game)?;
        LegalStep::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if before.positions().len() != after.positions().len() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: position list was resized".to_string(),
            ));
        }
        FoxHoundsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
