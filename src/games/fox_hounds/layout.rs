//! Position list and the starting layout.

use super::coordinate::{Coordinate, make_coordinate};
use super::types::{BoardError, Dimension};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Every piece on the board: the hounds first, the fox last.
///
/// The length is fixed when the list is created and no two entries are
/// ever equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Positions {
    pieces: Vec<Coordinate>,
}

impl Positions {
    /// Wraps a raw list. The last coordinate is the fox.
    ///
    /// Returns `None` for an empty list, which has no fox.
    pub fn from_vec(pieces: Vec<Coordinate>) -> Option<Self> {
        if pieces.is_empty() {
            None
        } else {
            Some(Self { pieces })
        }
    }

    /// Starting layout for an already validated dimension.
    #[instrument]
    pub fn initial(dimension: Dimension) -> Self {
        let dim = i32::from(dimension.get());
        let hounds = dimension.hound_count();

        let mut pieces: Vec<Coordinate> = (0..hounds as i32)
            .map(|i| make_coordinate(2 + 2 * i, 1))
            .collect();

        // The fox starts on the centre cell of the last row that shares
        // the hounds' colour.
        let fox_lateral = if (dim / 2 + 1 + dim) % 2 == 0 {
            dim / 2 + 2
        } else {
            dim / 2 + 1
        };
        pieces.push(make_coordinate(fox_lateral, dim));

        debug!(?pieces, "Initial layout");
        Self { pieces }
    }

    /// The fox's coordinate.
    pub fn fox(&self) -> Coordinate {
        self.pieces[self.pieces.len() - 1]
    }

    /// The hounds' coordinates, in list order.
    pub fn hounds(&self) -> &[Coordinate] {
        &self.pieces[..self.pieces.len() - 1]
    }

    /// All coordinates, hounds then fox.
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.pieces
    }

    /// Number of pieces, fox included.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Always false: a position list holds at least the fox.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// True if any piece stands on `coordinate`.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.pieces.contains(&coordinate)
    }

    /// True if a hound stands on `coordinate`.
    pub fn is_hound(&self, coordinate: Coordinate) -> bool {
        self.hounds().contains(&coordinate)
    }

    /// Mutable slot for the first piece standing on `coordinate`.
    pub(super) fn piece_at_mut(&mut self, coordinate: Coordinate) -> Option<&mut Coordinate> {
        self.pieces.iter_mut().find(|piece| **piece == coordinate)
    }
}

impl std::fmt::Display for Positions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .pieces
            .iter()
            .map(Coordinate::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", text)
    }
}

impl TryFrom<Vec<Coordinate>> for Positions {
    type Error = BoardError;

    fn try_from(pieces: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Self::from_vec(pieces).ok_or(BoardError::NoPieces)
    }
}

impl From<Positions> for Vec<Coordinate> {
    fn from(positions: Positions) -> Self {
        positions.pieces
    }
}

/// Builds the starting layout for a raw board dimension.
///
/// # Errors
///
/// Returns [`BoardError::InvalidDimension`] unless `4 <= dimension <= 26`.
#[instrument]
pub fn initial_positions(dimension: u32) -> Result<Positions, BoardError> {
    let dimension = Dimension::new(dimension)?;
    Ok(Positions::initial(dimension))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(text: &str) -> Vec<Coordinate> {
        text.split(' ').map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_standard_board_layout() {
        let positions = initial_positions(8).unwrap();
        assert_eq!(positions.as_slice(), coords("B1 D1 F1 H1 E8").as_slice());
        assert_eq!(positions.fox().to_string(), "E8");
        assert_eq!(positions.hounds().len(), 4);
    }

    #[test]
    fn test_fox_parity_rule() {
        // (4/2 + 1 + 4) = 7 is odd: lateral 3
        assert_eq!(initial_positions(4).unwrap().to_string(), "B1 D1 C4");
        // (6/2 + 1 + 6) = 10 is even: lateral 5
        assert_eq!(initial_positions(6).unwrap().to_string(), "B1 D1 F1 E6");
        // (5/2 + 1 + 5) = 8 is even: lateral 4
        assert_eq!(initial_positions(5).unwrap().to_string(), "B1 D1 D5");
    }

    #[test]
    fn test_rejects_invalid_dimension() {
        assert_eq!(initial_positions(3), Err(BoardError::InvalidDimension(3)));
        assert_eq!(initial_positions(27), Err(BoardError::InvalidDimension(27)));
        assert_eq!(initial_positions(0), Err(BoardError::InvalidDimension(0)));
    }

    #[test]
    fn test_from_vec_requires_a_fox() {
        assert!(Positions::from_vec(Vec::new()).is_none());
        let single = Positions::from_vec(vec![Coordinate::new(2, 2)]).unwrap();
        assert!(single.hounds().is_empty());
        assert_eq!(single.fox(), Coordinate::new(2, 2));
    }

    #[derive(Debug, Deserialize)]
    struct Snapshot {
        pieces: Positions,
    }

    #[test]
    fn test_deserialize_requires_a_fox() {
        let snapshot: Snapshot = toml::from_str("pieces = [\"B1\", \"E8\"]").unwrap();
        assert_eq!(snapshot.pieces.fox().to_string(), "E8");
        assert!(toml::from_str::<Snapshot>("pieces = []").is_err());
    }
}
