//! Uniformly random playouts.

use crate::game::oracle::{Action, GameOracle, Outcome};
use crate::{MctsError, Result};
use rand::prelude::*;

/// Reward for an agent win.
pub const WIN_PRIZE: u32 = 1;
/// Reward for a loss. Draws pay the same.
pub const LOSS_PRIZE: u32 = 0;

/// Maps a finished game to the agent's reward, `None` while the game goes on.
///
/// A draw is scored as a loss so the search never settles for one when a win
/// is on offer. A winner that is neither the agent nor its opponent breaks
/// the oracle contract.
pub fn reward_for<G: GameOracle>(
    oracle: &G,
    outcome: Outcome<G::Player>,
    agent: G::Player,
) -> Result<Option<u32>> {
    match outcome {
        Outcome::Ongoing => Ok(None),
        Outcome::Draw => Ok(Some(LOSS_PRIZE)),
        Outcome::Won(player) if player == agent => Ok(Some(WIN_PRIZE)),
        Outcome::Won(player) if player == oracle.opponent(agent) => Ok(Some(LOSS_PRIZE)),
        Outcome::Won(player) => Err(MctsError::OracleContract(format!(
            "winner {:?} is neither the agent {:?} nor its opponent",
            player, agent
        ))),
    }
}

/// Plays random moves from `state` until the game ends and scores the result
/// for `agent`.
///
/// Works on its own copy of the state and never touches the search tree.
pub fn simulate<G, R>(oracle: &G, state: &G::State, agent: G::Player, rng: &mut R) -> Result<u32>
where
    G: GameOracle,
    R: Rng + ?Sized,
{
    let mut state = state.clone();
    let mut consecutive_passes = 0;

    loop {
        if let Some(reward) = reward_for(oracle, oracle.winner(&state), agent)? {
            return Ok(reward);
        }

        let moves = oracle.legal_moves(&state);
        match moves.choose(rng) {
            Some(picked) => {
                consecutive_passes = 0;
                state = oracle.next_state(&state, &Action::Play(picked.clone()));
            }
            None => {
                consecutive_passes += 1;
                if consecutive_passes > 1 {
                    return Err(MctsError::OracleContract(format!(
                        "both sides passed in {:?} but the game is not over",
                        state
                    )));
                }
                state = oracle.next_state(&state, &Action::Pass);
            }
        }
    }
}
