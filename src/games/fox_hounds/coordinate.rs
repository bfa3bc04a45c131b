//! Board coordinates and their letter+number notation.
//!
//! Column `1` is written `A`, so `(5, 8)` is `E8`. Coordinates are plain
//! values: nothing here knows the board size, and an out-of-range
//! coordinate simply never equals a real piece position.

use super::types::Dimension;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Offset between a lateral index and its letter (`'A'` is lateral 1).
pub const CHAR_SHIFT: u32 = 64;

/// A cell address, 1-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    /// Column, counted from the left starting at 1.
    pub lateral: i32,
    /// Row, counted from the top starting at 1.
    pub vertical: i32,
}

/// Builds a coordinate from its two axes without range checks.
#[instrument]
pub fn make_coordinate(lateral: i32, vertical: i32) -> Coordinate {
    Coordinate::new(lateral, vertical)
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(lateral: i32, vertical: i32) -> Self {
        Self { lateral, vertical }
    }

    /// Returns the coordinate shifted by the given deltas, saturating at
    /// the `i32` limits.
    pub fn offset(self, d_lateral: i32, d_vertical: i32) -> Self {
        Self::new(
            self.lateral.saturating_add(d_lateral),
            self.vertical.saturating_add(d_vertical),
        )
    }

    /// The four diagonal neighbours, whether or not they are on the board.
    pub fn diagonals(self) -> [Coordinate; 4] {
        [
            self.offset(1, 1),
            self.offset(1, -1),
            self.offset(-1, 1),
            self.offset(-1, -1),
        ]
    }

    /// True if both axes lie within `1..=dimension`.
    pub fn is_on_board(self, dimension: Dimension) -> bool {
        let max = i32::from(dimension.get());
        (1..=max).contains(&self.lateral) && (1..=max).contains(&self.vertical)
    }

    /// Column letter, or `'?'` for laterals that have none.
    pub fn letter(self) -> char {
        u32::try_from(self.lateral)
            .ok()
            .and_then(|lat| char::from_u32(CHAR_SHIFT + lat))
            .unwrap_or('?')
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter(), self.vertical)
    }
}

/// Reasons coordinate text could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CoordinateError {
    /// Nothing to parse.
    #[display("Coordinate is empty")]
    Empty,

    /// First character is not an uppercase column letter.
    #[display("Invalid column letter {:?}", _0)]
    InvalidLetter(char),

    /// Text after the letter is not a row number.
    #[display("Invalid row number {:?}", _0)]
    InvalidNumber(String),
}

impl std::error::Error for CoordinateError {}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parses `E8`-style text. Accepts any uppercase letter and any
    /// decimal row; the caller decides whether it is on the board.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut chars = text.chars();
        let letter = chars.next().ok_or(CoordinateError::Empty)?;
        if !letter.is_ascii_uppercase() {
            return Err(CoordinateError::InvalidLetter(letter));
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoordinateError::InvalidNumber(digits.to_string()));
        }
        let vertical = digits
            .parse::<i32>()
            .map_err(|_| CoordinateError::InvalidNumber(digits.to_string()))?;
        let lateral = (u32::from(letter) - CHAR_SHIFT) as i32;
        Ok(Self::new(lateral, vertical))
    }
}

impl TryFrom<String> for Coordinate {
    type Error = CoordinateError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Coordinate> for String {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_string()
    }
}
