//! Plays complete games between two agents.

use crate::agent::Agent;
use crate::game::oracle::{Action, GameOracle, Outcome};
use crate::{MctsError, Result};

/// One side of a game: who plays it and which agent decides for it.
pub struct Seat<'a, G: GameOracle> {
    pub player: G::Player,
    pub agent: &'a mut dyn Agent<G>,
}

/// What happened in a finished game.
#[derive(Debug, Clone)]
pub struct GameRecord<S, M, P> {
    pub outcome: Outcome<P>,
    /// Every action in order, forced passes included
    pub actions: Vec<Action<M>>,
    pub final_state: S,
}

/// Plays from `initial` until the oracle declares a result.
///
/// Both agents are reset before the first move and told the outcome at the
/// end. The side without a legal move passes without consulting its agent.
pub fn play_game<G: GameOracle>(
    oracle: &G,
    initial: G::State,
    mut seats: [Seat<'_, G>; 2],
) -> Result<GameRecord<G::State, G::Move, G::Player>> {
    for seat in seats.iter_mut() {
        seat.agent.reset();
    }

    let mut state = initial;
    let mut actions = Vec::new();
    let mut consecutive_passes = 0;

    loop {
        let outcome = oracle.winner(&state);
        if outcome.is_over() {
            log::info!("Game over after {} actions: {:?}", actions.len(), outcome);
            for seat in seats.iter_mut() {
                seat.agent.observe_result(&outcome);
            }
            return Ok(GameRecord {
                outcome,
                actions,
                final_state: state,
            });
        }

        let mover = oracle.to_move(&state);
        let seat = seats
            .iter_mut()
            .find(|seat| seat.player == mover)
            .ok_or_else(|| MctsError::OracleContract(format!("no seat for player {:?}", mover)))?;

        let legal = oracle.legal_moves(&state);
        let action = if legal.is_empty() {
            consecutive_passes += 1;
            if consecutive_passes > 1 {
                return Err(MctsError::OracleContract(format!(
                    "both sides passed in {:?} but the game is not over",
                    state
                )));
            }
            Action::Pass
        } else {
            consecutive_passes = 0;
            match seat.agent.decide(&state)? {
                Some(mv) if legal.contains(&mv) => Action::Play(mv),
                Some(mv) => {
                    return Err(MctsError::Invariant(format!(
                        "agent for {:?} chose illegal move {:?}",
                        mover, mv
                    )))
                }
                None => {
                    return Err(MctsError::Invariant(format!(
                        "agent for {:?} returned no move with {} legal moves",
                        mover,
                        legal.len()
                    )))
                }
            }
        };

        log::debug!("{:?} plays {:?}", mover, action);
        state = oracle.next_state(&state, &action);
        actions.push(action);
    }
}
