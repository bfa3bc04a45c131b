//! Core domain types for Fox and Hounds.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default board dimension when none is specified.
pub const DEFAULT_DIM: u8 = 8;
/// Smallest playable board dimension.
pub const MIN_DIM: u8 = 4;
/// Largest playable board dimension (one letter per column).
pub const MAX_DIM: u8 = 26;

/// Symbol used for a hound on the board and in save files.
pub const HOUND_FIELD: char = 'H';
/// Symbol used for the fox on the board and in save files.
pub const FOX_FIELD: char = 'F';

/// A piece kind. Doubles as the turn indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Figure {
    /// The single evading piece. Moves first.
    Fox,
    /// One of the pursuing pieces.
    Hound,
}

impl Figure {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Figure::Fox => Figure::Hound,
            Figure::Hound => Figure::Fox,
        }
    }

    /// Board and save-file symbol for this figure.
    pub fn symbol(self) -> char {
        match self {
            Figure::Fox => FOX_FIELD,
            Figure::Hound => HOUND_FIELD,
        }
    }

    /// Parses a board symbol back into a figure.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            FOX_FIELD => Some(Figure::Fox),
            HOUND_FIELD => Some(Figure::Hound),
            _ => None,
        }
    }

    /// Name of the side as shown to players.
    pub fn label(self) -> &'static str {
        match self {
            Figure::Fox => "Fox",
            Figure::Hound => "Hounds",
        }
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Toggles the turn indicator after a completed move.
#[instrument]
pub fn swap_turn(current: Figure) -> Figure {
    current.opponent()
}

/// Errors raised while setting up a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardError {
    /// Dimension outside the playable range.
    #[display("Board dimension {} is outside {}..={}", _0, MIN_DIM, MAX_DIM)]
    InvalidDimension(u32),

    /// A position list without any piece, so without a fox.
    #[display("Position list is empty")]
    NoPieces,
}

impl std::error::Error for BoardError {}

/// Side length of a square board, always within `MIN_DIM..=MAX_DIM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Dimension(u8);

impl Dimension {
    /// Validates a raw dimension.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimension`] when `raw` is not in
    /// `MIN_DIM..=MAX_DIM`.
    #[instrument]
    pub fn new(raw: u32) -> Result<Self, BoardError> {
        if raw < u32::from(MIN_DIM) || raw > u32::from(MAX_DIM) {
            return Err(BoardError::InvalidDimension(raw));
        }
        // Range checked above.
        Ok(Self(raw as u8))
    }

    /// Validates a raw dimension, falling back to [`DEFAULT_DIM`] instead of failing.
    #[instrument]
    pub fn clamped(raw: u32) -> Self {
        Self::new(raw).unwrap_or_else(|err| {
            debug!(%err, "Falling back to default dimension");
            Self::default()
        })
    }

    /// Leniently parses user text; anything unusable yields the default.
    #[instrument]
    pub fn parse_lenient(text: &str) -> Self {
        match text.trim().parse::<u32>() {
            Ok(raw) => Self::clamped(raw),
            Err(_) => {
                debug!("Dimension input is not a number, using default");
                Self::default()
            }
        }
    }

    /// Side length of the board.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of hounds on this board.
    pub fn hound_count(self) -> usize {
        usize::from(self.0 / 2)
    }

    /// Length of the position list: every hound plus the fox.
    pub fn piece_count(self) -> usize {
        self.hound_count() + 1
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self(DEFAULT_DIM)
    }
}

impl TryFrom<u32> for Dimension {
    type Error = BoardError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Dimension> for u32 {
    fn from(dimension: Dimension) -> Self {
        u32::from(dimension.0)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being played.
    InProgress,
    /// One side has won.
    Won(Figure),
}

impl GameStatus {
    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Figure> {
        match self {
            GameStatus::Won(figure) => Some(figure),
            GameStatus::InProgress => None,
        }
    }

    /// Returns true once the game has a winner.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(Figure::Fox) => write!(f, "The Fox wins!"),
            GameStatus::Won(Figure::Hound) => write!(f, "The Hounds win!"),
        }
    }
}
