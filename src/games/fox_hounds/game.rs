//! Session state machine for one game of Fox and Hounds.
//!
//! `Game` is the only long-lived state: the board dimension, the position
//! list, whose turn it is, and whether someone has won. It changes through
//! [`Game::make_move`] and [`Game::restore`] and nothing else, and both
//! leave it untouched when they fail.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::invariants::{FoxHoundsInvariants, InvariantSet};
use super::layout::Positions;
use super::rules::{apply_move, winner};
use super::save::{PersistenceError, SaveRecord};
use super::types::{Dimension, Figure, GameStatus, swap_turn};
use tracing::{info, instrument, warn};

/// A game in any phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(super) dimension: Dimension,
    pub(super) positions: Positions,
    pub(super) turn: Figure,
    pub(super) status: GameStatus,
}

impl Game {
    /// Starts a game on the initial layout with the fox to move.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        let positions = Positions::initial(dimension);
        let status = status_of(&positions, dimension);
        Self {
            dimension,
            positions,
            turn: Figure::Fox,
            status,
        }
    }

    /// Board dimension for the whole session.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Current position list.
    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    /// Side to move next.
    pub fn turn(&self) -> Figure {
        self.turn
    }

    /// Whether the game is still running.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Plays a move for the side on turn.
    ///
    /// On success the piece is relocated, the status re-evaluated, and the
    /// turn passed to the other side. The new status is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the game is over, the wrong side moves,
    /// or the step breaks the movement rules. The game is unchanged.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn make_move(&mut self, action: Move) -> Result<GameStatus, MoveError> {
        MoveContract::pre(self, &action)?;

        let mut next = self.clone();
        next.positions = apply_move(next.positions, action.origin, action.destination);
        next.status = status_of(&next.positions, next.dimension);
        next.turn = swap_turn(next.turn);

        MoveContract::post(self, &next)?;

        *self = next;
        if let GameStatus::Won(figure) = self.status {
            info!(%figure, "Game won");
        }
        Ok(self.status)
    }

    /// Snapshot of the turn and positions for saving.
    pub fn save_record(&self) -> SaveRecord {
        SaveRecord::new(self.turn, self.positions.clone())
    }

    /// Replaces the positions and turn with a loaded record.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::UnsupportedDimension`] unless the board
    /// has the save-file dimension, and
    /// [`PersistenceError::MalformedSaveData`] if the record would break a
    /// board invariant. The game is unchanged on error.
    #[instrument(skip(self, record), fields(record = %record))]
    pub fn restore(&mut self, record: SaveRecord) -> Result<GameStatus, PersistenceError> {
        SaveRecord::check_dimension(self.dimension)?;

        let candidate = Self {
            dimension: self.dimension,
            status: status_of(&record.positions, self.dimension),
            positions: record.positions,
            turn: record.turn,
        };
        if let Err(violations) = FoxHoundsInvariants::check_all(&candidate) {
            warn!(?violations, "Loaded record rejected");
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PersistenceError::MalformedSaveData(descriptions));
        }

        *self = candidate;
        info!(turn = %self.turn, "Game restored");
        Ok(self.status)
    }
}

fn status_of(positions: &Positions, dimension: Dimension) -> GameStatus {
    match winner(positions, dimension) {
        Some(figure) => GameStatus::Won(figure),
        None => GameStatus::InProgress,
    }
}
