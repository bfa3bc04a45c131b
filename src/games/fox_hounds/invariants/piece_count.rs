//! Piece count invariant: the position list never changes length.

use super::super::Game;
use super::Invariant;

/// Invariant: the list holds `dimension / 2` hounds plus the fox.
pub struct PieceCountInvariant;

impl Invariant<Game> for PieceCountInvariant {
    fn holds(game: &Game) -> bool {
        game.positions().len() == game.dimension().piece_count()
    }

    fn description() -> &'static str {
        "Position list holds dimension/2 hounds and one fox"
    }
}
