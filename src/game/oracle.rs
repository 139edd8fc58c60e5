//! The contract between the search engine and a rules engine.
//!
//! The engine never looks inside a game state. Everything it knows about a
//! game comes through [`GameOracle`], whose methods must be pure: calling them
//! twice with the same arguments gives the same answer.

use std::fmt::Debug;
use std::hash::Hash;

/// A move or the forced pass played when the side to move has no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action<M> {
    Play(M),
    Pass,
}

impl<M> Action<M> {
    /// The underlying move, `None` for a pass.
    pub fn as_move(&self) -> Option<&M> {
        match self {
            Action::Play(mv) => Some(mv),
            Action::Pass => None,
        }
    }

    pub fn into_move(self) -> Option<M> {
        match self {
            Action::Play(mv) => Some(mv),
            Action::Pass => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }
}

/// Result of asking the oracle whether the game is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<P> {
    /// Nobody has won yet; play continues.
    Ongoing,
    Won(P),
    /// Equal score for both sides.
    Draw,
}

impl<P> Outcome<P> {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Rules of a deterministic, perfect-information, two-player game.
pub trait GameOracle {
    /// Board contents plus the side to move. Used as the node store key.
    type State: Clone + Eq + Hash + Debug;
    type Move: Clone + Eq + Hash + Debug;
    type Player: Copy + Eq + Debug;

    /// Legal moves for the side to move. Empty means that side must pass.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    fn winner(&self, state: &Self::State) -> Outcome<Self::Player>;

    /// Applies `action` to `state`. `Action::Pass` is only offered when
    /// `legal_moves` is empty and the game is not over.
    fn next_state(&self, state: &Self::State, action: &Action<Self::Move>) -> Self::State;

    /// The side to move at `state`.
    fn to_move(&self, state: &Self::State) -> Self::Player;

    fn opponent(&self, player: Self::Player) -> Self::Player;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_accessors() {
        let play: Action<u8> = Action::Play(4);
        assert_eq!(play.as_move(), Some(&4));
        assert!(!play.is_pass());
        assert_eq!(play.into_move(), Some(4));

        let pass: Action<u8> = Action::Pass;
        assert!(pass.is_pass());
        assert_eq!(pass.as_move(), None);
    }

    #[test]
    fn test_outcome_is_over() {
        assert!(!Outcome::<u8>::Ongoing.is_over());
        assert!(Outcome::Won(1u8).is_over());
        assert!(Outcome::<u8>::Draw.is_over());
    }
}
