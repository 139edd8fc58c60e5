//! Decision makers.
//!
//! Anything that can pick a move for one side implements [`Agent`]. The game
//! driver in [`arena`](crate::arena) only talks to this trait, so MCTS, the
//! random baseline and any future agent are interchangeable.

use crate::game::oracle::{GameOracle, Outcome};
use crate::Result;
use rand::prelude::*;

pub trait Agent<G: GameOracle> {
    /// Chooses a move in `state`, `None` when the side to move has none.
    fn decide(&mut self, state: &G::State) -> Result<Option<G::Move>>;

    /// Prepares for a new game.
    fn reset(&mut self);

    /// Called once when a game ends.
    fn observe_result(&mut self, outcome: &Outcome<G::Player>);
}

/// Plays a uniformly random legal move. Baseline for benchmarking.
pub struct RandomAgent<G> {
    oracle: G,
    rng: StdRng,
}

impl<G: GameOracle> RandomAgent<G> {
    pub fn new(oracle: G, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            oracle,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<G: GameOracle> Agent<G> for RandomAgent<G> {
    fn decide(&mut self, state: &G::State) -> Result<Option<G::Move>> {
        Ok(self.oracle.legal_moves(state).choose(&mut self.rng).cloned())
    }

    fn reset(&mut self) {}

    fn observe_result(&mut self, _outcome: &Outcome<G::Player>) {}
}
