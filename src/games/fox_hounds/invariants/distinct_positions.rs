//! Distinct positions invariant: no two pieces share a cell.

use super::super::Game;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every entry of the position list is unique.
pub struct DistinctPositionsInvariant;

impl Invariant<Game> for DistinctPositionsInvariant {
    fn holds(game: &Game) -> bool {
        let mut seen = HashSet::new();
        game.positions().as_slice().iter().all(|piece| seen.insert(*piece))
    }

    fn description() -> &'static str {
        "No two pieces share a cell"
    }
}
