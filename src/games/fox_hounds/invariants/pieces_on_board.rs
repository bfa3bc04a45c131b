//! Pieces on board invariant: nothing ever stands outside the grid.

use super::super::Game;
use super::Invariant;

/// Invariant: every piece lies within `1..=dimension` on both axes.
pub struct PiecesOnBoardInvariant;

impl Invariant<Game> for PiecesOnBoardInvariant {
    fn holds(game: &Game) -> bool {
        let dimension = game.dimension();
        game.positions()
            .as_slice()
            .iter()
            .all(|piece| piece.is_on_board(dimension))
    }

    fn description() -> &'static str {
        "Every piece stands on the board"
    }
}
