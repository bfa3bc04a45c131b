//! Game rules for Fox and Hounds.
//!
//! Pure functions over a position list and a board dimension. Nothing here
//! holds state; callers thread the position list through explicitly.

pub mod movement;
pub mod win;

pub use movement::{apply_move, check_move, is_valid_move};
pub use win::{is_fox_win, is_hound_win, is_winner, winner};
