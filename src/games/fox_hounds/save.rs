//! Flat one-line save files.
//!
//! A save file holds the side to move followed by every piece, separated
//! by single spaces: `F B1 D1 F1 H1 E8`. The format only covers the
//! standard 8x8 board with its five pieces.

use super::coordinate::Coordinate;
use super::layout::Positions;
use super::types::{DEFAULT_DIM, Dimension, Figure};
use derive_more::Display;
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Board dimension the save format is fixed to.
pub const SAVE_DIMENSION: u8 = DEFAULT_DIM;

/// Pieces stored in a save file: four hounds and the fox.
pub const PIECE_NUM: usize = 5;

/// Failures while saving or loading.
#[derive(Debug, Display)]
pub enum PersistenceError {
    /// Save files only exist for the 8x8 board.
    #[display(
        "Saving and loading need a {}x{} board, this one is {}x{}",
        SAVE_DIMENSION,
        SAVE_DIMENSION,
        _0,
        _0
    )]
    UnsupportedDimension(Dimension),

    /// The target file already exists and is never overwritten.
    #[display("Save file {} already exists", _0.display())]
    SaveConflict(PathBuf),

    /// File contents are not a valid save record.
    #[display("Malformed save data: {}", _0)]
    MalformedSaveData(String),

    /// Reading or writing the file failed.
    #[display("I/O error: {}", _0)]
    Io(io::Error),
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PersistenceError {
    fn from(err: io::Error) -> Self {
        PersistenceError::Io(err)
    }
}

/// Everything needed to resume a game: whose turn it is and where every
/// piece stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRecord {
    /// Side to move next.
    pub turn: Figure,
    /// Hounds then fox.
    pub positions: Positions,
}

impl SaveRecord {
    /// Creates a record.
    pub fn new(turn: Figure, positions: Positions) -> Self {
        Self { turn, positions }
    }

    /// Fails unless `dimension` is the one save files are written for.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::UnsupportedDimension`] for any other board.
    pub fn check_dimension(dimension: Dimension) -> Result<(), PersistenceError> {
        if dimension.get() == SAVE_DIMENSION {
            Ok(())
        } else {
            Err(PersistenceError::UnsupportedDimension(dimension))
        }
    }
}

impl std::fmt::Display for SaveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.turn.symbol(), self.positions)
    }
}

impl FromStr for SaveRecord {
    type Err = PersistenceError;

    /// Parses and fully validates one save line. Trailing whitespace,
    /// including the line break, is tolerated.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = PersistenceError::MalformedSaveData;
        let line = line.trim_end();
        let mut tokens = line.split(' ');

        let turn_token = tokens.next().unwrap_or_default();
        let turn = match turn_token {
            "F" => Figure::Fox,
            "H" => Figure::Hound,
            other => return Err(malformed(format!("invalid turn token {:?}", other))),
        };

        let board = Dimension::clamped(u32::from(SAVE_DIMENSION));
        let mut seen = HashSet::new();
        let mut pieces = Vec::with_capacity(PIECE_NUM);
        for token in tokens {
            let coordinate: Coordinate = token
                .parse()
                .map_err(|err| malformed(format!("{:?}: {}", token, err)))?;
            if !coordinate.is_on_board(board) {
                return Err(malformed(format!("{} is off the {}x{} board", token, board, board)));
            }
            if !seen.insert(coordinate) {
                return Err(malformed(format!("{} appears twice", token)));
            }
            pieces.push(coordinate);
        }

        if pieces.len() != PIECE_NUM {
            return Err(malformed(format!(
                "expected {} coordinates, found {}",
                PIECE_NUM,
                pieces.len()
            )));
        }

        let positions = Positions::from_vec(pieces)
            .ok_or_else(|| malformed("no pieces".to_string()))?;
        Ok(Self { turn, positions })
    }
}

/// Writes a new save file for the given state.
///
/// # Errors
///
/// - [`PersistenceError::UnsupportedDimension`] when not on the 8x8 board
/// - [`PersistenceError::SaveConflict`] when `path` already exists
/// - [`PersistenceError::Io`] when the file cannot be written
#[instrument(skip(positions, path), fields(path = %path.display()))]
pub fn save_game(
    dimension: Dimension,
    positions: &Positions,
    turn: Figure,
    path: &Path,
) -> Result<(), PersistenceError> {
    SaveRecord::check_dimension(dimension)?;
    if positions.len() != PIECE_NUM {
        return Err(PersistenceError::MalformedSaveData(format!(
            "expected {} pieces, found {}",
            PIECE_NUM,
            positions.len()
        )));
    }

    let record = SaveRecord::new(turn, positions.clone());
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| {
            if err.kind() == io::ErrorKind::AlreadyExists {
                warn!("Refusing to overwrite existing save");
                PersistenceError::SaveConflict(path.to_path_buf())
            } else {
                PersistenceError::Io(err)
            }
        })?;
    file.write_all(record.to_string().as_bytes())?;

    info!(%record, "Game saved");
    Ok(())
}

/// Reads and validates a save file.
///
/// Nothing is applied here: the caller hands the record to
/// [`Game::restore`](super::Game::restore) only once it parsed cleanly.
///
/// # Errors
///
/// - [`PersistenceError::UnsupportedDimension`] when not on the 8x8 board
/// - [`PersistenceError::Io`] when the file cannot be read
/// - [`PersistenceError::MalformedSaveData`] when the contents are invalid
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_game(dimension: Dimension, path: &Path) -> Result<SaveRecord, PersistenceError> {
    SaveRecord::check_dimension(dimension)?;

    let content = fs::read_to_string(path)?;
    debug!(content = %content.trim_end(), "Read save file");
    let record = content.parse::<SaveRecord>()?;

    info!(%record, "Game loaded");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<SaveRecord, PersistenceError> {
        line.parse()
    }

    #[test]
    fn test_display_matches_file_format() {
        let record = SaveRecord::new(Figure::Fox, Positions::initial(Dimension::default()));
        assert_eq!(record.to_string(), "F B1 D1 F1 H1 E8");
    }

    #[test]
    fn test_parse_valid_line() {
        let record = parse("H B1 D1 F1 H1 D7").unwrap();
        assert_eq!(record.turn, Figure::Hound);
        assert_eq!(record.positions.fox(), Coordinate::new(4, 7));
        assert!(parse("F B1 D1 F1 H1 E8\n").is_ok());
        assert!(parse("F B1 D1 F1 H1 E8  \r\n").is_ok());
    }

    #[test]
    fn test_rejects_bad_turn_token() {
        assert!(matches!(
            parse("Z B1 D1 F1 H1 E8"),
            Err(PersistenceError::MalformedSaveData(_))
        ));
        assert!(parse("FH B1 D1 F1 H1 E8").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_rejects_off_board_coordinates() {
        assert!(parse("F A99 D1 F1 H1 E8").is_err());
        assert!(parse("F B1 D1 F1 I1 E8").is_err());
        assert!(parse("F B1 D1 F1 H1 E0").is_err());
        assert!(parse("F B1 D1 F1 H1 Ex").is_err());
    }

    #[test]
    fn test_rejects_wrong_piece_count() {
        assert!(parse("F B1 D1 F1 E8").is_err());
        assert!(parse("F B1 D1 F1 H1 A3 E8").is_err());
    }

    #[test]
    fn test_rejects_duplicates_and_stray_spaces() {
        assert!(parse("F B1 B1 F1 H1 E8").is_err());
        assert!(parse("F  B1 D1 F1 H1 E8").is_err());
    }

    #[test]
    fn test_only_standard_board() {
        assert!(SaveRecord::check_dimension(Dimension::default()).is_ok());
        assert!(matches!(
            SaveRecord::check_dimension(Dimension::new(9).unwrap()),
            Err(PersistenceError::UnsupportedDimension(_))
        ));
    }

    #[test]
    fn test_save_refuses_wrong_piece_count() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("short.txt");
        let positions = Positions::initial(Dimension::new(6).unwrap());
        let err = save_game(Dimension::default(), &positions, Figure::Fox, &path).unwrap_err();
        assert!(matches!(err, PersistenceError::MalformedSaveData(_)), "{}", err);
        assert!(!path.exists());
    }
}
