mod action;
mod contracts;
mod coordinate;
mod game;
mod invariants;
mod layout;
mod rules;
mod save;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalStep, MoveContract, PlayersTurn};
pub use coordinate::{CHAR_SHIFT, Coordinate, CoordinateError, make_coordinate};
pub use game::Game;
pub use invariants::{
    DistinctPositionsInvariant, FoxHoundsInvariants, Invariant, InvariantSet, InvariantViolation,
    PieceCountInvariant, PiecesOnBoardInvariant,
};
pub use layout::{Positions, initial_positions};
pub use rules::{apply_move, check_move, is_fox_win, is_hound_win, is_valid_move, is_winner, winner};
pub use save::{PIECE_NUM, PersistenceError, SAVE_DIMENSION, SaveRecord, load_game, save_game};
pub use types::{
    BoardError, DEFAULT_DIM, Dimension, FOX_FIELD, Figure, GameStatus, HOUND_FIELD, MAX_DIM,
    MIN_DIM, swap_turn,
};
