//! Fox and Hounds library - rules engine and console front end
//!
//! One fox tries to reach the far edge of a square board while
//! `dimension / 2` hounds try to trap it.
//!
//! # Architecture
//!
//! - **Games**: the board model and pure rules engine, plus the session
//!   state machine and the flat save-file format
//! - **Console**: board rendering, prompts, and the menu loop
//! - **Config**: TOML settings and command-line overrides
//!
//! # Example
//!
//! ```
//! use fox_hounds::{Coordinate, Dimension, Figure, Game, GameStatus, Move};
//!
//! let mut game = Game::new(Dimension::default());
//! assert_eq!(game.positions().to_string(), "B1 D1 F1 H1 E8");
//!
//! let fox = Move::new(Figure::Fox, "E8".parse()?, "D7".parse()?);
//! assert_eq!(game.make_move(fox), Ok(GameStatus::InProgress));
//! assert_eq!(game.turn(), Figure::Hound);
//! # Ok::<(), fox_hounds::CoordinateError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console front end
pub use console::{App, BoardStyle, Console, MenuChoice, in_range, render_board};

// Crate-level exports - Fox and Hounds
pub use games::fox_hounds::{
    BoardError, CHAR_SHIFT, Contract, Coordinate, CoordinateError, DEFAULT_DIM, Dimension,
    DistinctPositionsInvariant, FOX_FIELD, Figure, FoxHoundsInvariants, Game, GameNotOver,
    GameStatus, HOUND_FIELD, Invariant, InvariantSet, InvariantViolation, LegalStep, MAX_DIM,
    MIN_DIM, Move, MoveContract, MoveError, PIECE_NUM, PersistenceError, PieceCountInvariant,
    PiecesOnBoardInvariant, PlayersTurn, Positions, SAVE_DIMENSION, SaveRecord, apply_move,
    check_move, initial_positions, is_fox_win, is_hound_win, is_valid_move, is_winner,
    load_game, make_coordinate, save_game, swap_turn, winner,
};
