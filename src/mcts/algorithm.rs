//! Time-budgeted Monte Carlo Tree Search.
//!
//! Each cycle walks the tree from the root with UCT until it reaches a node
//! with an untried move (expanding exactly one child) or a finished game,
//! plays a random game from there, and credits the result to every node on
//! the way back. Cycles repeat until the clock says the budget is spent; the
//! most visited root child is the answer.
//!
//! The node store outlives a single decision, so positions searched during
//! earlier moves of the same game start with the statistics they already
//! earned.

use crate::agent::Agent;
use crate::clock::{Clock, SystemClock};
use crate::game::oracle::{Action, GameOracle, Outcome};
use crate::mcts::backpropagation::{backpropagate, best_action};
use crate::mcts::hyperparameters::MctsConfig;
use crate::mcts::mcts_result::{ChildStats, SearchReport};
use crate::mcts::node::NodeId;
use crate::mcts::node_store::NodeStore;
use crate::mcts::rollout::simulate;
use crate::mcts::selection::{select_best_child, Perspective};
use crate::{MctsError, Result};
use rand::prelude::*;

/// MCTS decision maker playing one side of a game.
pub struct MctsAgent<G: GameOracle, C: Clock = SystemClock> {
    oracle: G,
    player: G::Player,
    config: MctsConfig,
    store: NodeStore<G::State, G::Move>,
    rng: StdRng,
    clock: C,
}

impl<G: GameOracle> MctsAgent<G, SystemClock> {
    /// Agent for `player` that spends real wall-clock time.
    pub fn new(oracle: G, player: G::Player, config: MctsConfig) -> Result<Self> {
        Self::with_clock(oracle, player, config, SystemClock::new())
    }
}

impl<G: GameOracle, C: Clock> MctsAgent<G, C> {
    pub fn with_clock(oracle: G, player: G::Player, config: MctsConfig, clock: C) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::debug!(
            "MCTS agent for {:?}: {} (rng seed {})",
            player,
            config.to_config_string(),
            seed
        );
        Ok(Self {
            oracle,
            player,
            config,
            store: NodeStore::new(),
            rng: StdRng::seed_from_u64(seed),
            clock,
        })
    }

    pub fn player(&self) -> G::Player {
        self.player
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// The node cache shared by all decisions of the current game.
    pub fn store(&self) -> &NodeStore<G::State, G::Move> {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Searches from `state` until the time budget runs out.
    ///
    /// The budget is checked only between cycles, so the search can overrun
    /// it by the length of one cycle.
    pub fn search(&mut self, state: &G::State) -> Result<SearchReport<G::Move>> {
        if self.oracle.legal_moves(state).is_empty() {
            return Ok(SearchReport::empty());
        }

        let root = self.store.get_or_create(&self.oracle, state);
        let reused_plays = self.store.get(root).plays();
        self.store.promote_to_root(root);

        let budget = self.config.time_budget();
        let start = self.clock.now();
        let mut iterations = 0u64;
        let elapsed = loop {
            let elapsed = self.clock.now().saturating_sub(start);
            if elapsed >= budget {
                break elapsed;
            }
            self.run_cycle(root)?;
            iterations += 1;
        };

        let best_move = best_action(&self.store, root, &mut self.rng).and_then(Action::into_move);
        let report = self.report(root, best_move, iterations, elapsed);
        self.log_report(&report, reused_plays);
        Ok(report)
    }

    /// One select → expand → simulate → backpropagate pass.
    fn run_cycle(&mut self, root: NodeId) -> Result<()> {
        let leaf = self.tree_policy(root)?;
        let reward = simulate(
            &self.oracle,
            self.store.get(leaf).game_state(),
            self.player,
            &mut self.rng,
        )?;
        backpropagate(&mut self.store, leaf, reward)
    }

    /// Walks down from `root` and returns the node to simulate from: a fresh
    /// child, or a node where the game is already over.
    pub(crate) fn tree_policy(&mut self, root: NodeId) -> Result<NodeId> {
        let mut current = root;
        loop {
            let node = self.store.get(current);
            if node.legal_moves().is_empty() {
                return Ok(current);
            }

            if node.is_forced_pass() {
                let child = self.store.add_child(&self.oracle, current, Action::Pass)?;
                self.descend(current, child)?;
                current = child;
                continue;
            }

            if !node.is_fully_expanded() {
                let untried = node.untried_moves();
                let action = untried.choose(&mut self.rng).cloned().ok_or_else(|| {
                    MctsError::Invariant(format!(
                        "node {} is not fully expanded but has no untried move",
                        current.index()
                    ))
                })?;
                return self.store.add_child(&self.oracle, current, action);
            }

            let perspective = self.perspective(current);
            let child = select_best_child(
                &self.store,
                current,
                perspective,
                self.config.exploration_constant,
            )?;
            self.descend(current, child)?;
            current = child;
        }
    }

    /// Re-points `child` at `parent` before stepping into it, so that
    /// backpropagation retraces the path just walked even when a
    /// transposition first attached `child` elsewhere.
    fn descend(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let action = self
            .store
            .get(parent)
            .children()
            .iter()
            .find(|(_, id)| *id == child)
            .map(|(action, _)| action.clone())
            .ok_or_else(|| {
                MctsError::Invariant(format!(
                    "node {} is not a child of node {}",
                    child.index(),
                    parent.index()
                ))
            })?;
        self.store.link(parent, child, action)
    }

    fn perspective(&self, node: NodeId) -> Perspective {
        if self.oracle.to_move(self.store.get(node).game_state()) == self.player {
            Perspective::Agent
        } else {
            Perspective::Opponent
        }
    }

    fn report(
        &self,
        root: NodeId,
        best_move: Option<G::Move>,
        iterations: u64,
        elapsed: std::time::Duration,
    ) -> SearchReport<G::Move> {
        let root_node = self.store.get(root);
        let children = root_node
            .children()
            .iter()
            .map(|(action, id)| {
                let child = self.store.get(*id);
                ChildStats {
                    action: action.clone(),
                    wins: child.wins(),
                    plays: child.plays(),
                }
            })
            .collect();

        SearchReport {
            best_move,
            iterations,
            elapsed,
            root_plays: root_node.plays(),
            root_wins: root_node.wins(),
            children,
        }
    }

    fn log_report(&self, report: &SearchReport<G::Move>, reused_plays: u32) {
        let mut by_plays: Vec<&ChildStats<G::Move>> = report.children.iter().collect();
        by_plays.sort_by_key(|stats| stats.plays);
        for stats in by_plays {
            log::debug!("{:?}: ({}/{})", stats.action, stats.wins, stats.plays);
        }
        log::info!(
            "{} simulations performed in {:.2?} ({} reused, {} nodes), chose {:?}",
            report.iterations,
            report.elapsed,
            reused_plays,
            self.store.len(),
            report.best_move
        );
    }
}

impl<G: GameOracle, C: Clock> Agent<G> for MctsAgent<G, C> {
    fn decide(&mut self, state: &G::State) -> Result<Option<G::Move>> {
        Ok(self.search(state)?.best_move)
    }

    /// Forgets the whole tree; statistics do not carry over between games.
    fn reset(&mut self) {
        log::debug!("Dropping {} cached nodes", self.store.len());
        self.store.clear();
    }

    fn observe_result(&mut self, outcome: &Outcome<G::Player>) {
        match outcome {
            Outcome::Won(player) if *player == self.player => log::info!("MCTS {:?} won", self.player),
            Outcome::Won(player) => log::info!("MCTS {:?} lost to {:?}", self.player, player),
            Outcome::Draw => log::info!("MCTS {:?} drew", self.player),
            Outcome::Ongoing => log::warn!("Result reported for a game still in progress"),
        }
    }
}
