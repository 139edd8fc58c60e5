//! UCT child selection.
//!
//! Formula: win_rate + C × sqrt(2 × ln(N_parent) / N_child)
//!
//! Node statistics always count wins for the deciding agent. At a node where
//! the opponent moves, the opponent is assumed to minimize that count, so the
//! win rate is replaced by its complement before scoring.

use crate::mcts::node::NodeId;
use crate::mcts::node_store::NodeStore;
use crate::{MctsError, Result};

/// Whose turn it is at the node being selected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Agent,
    Opponent,
}

/// UCT score of one child.
///
/// A child with no plays scores `+inf` so it is always tried first.
pub fn uct_value(
    child_wins: u32,
    child_plays: u32,
    parent_plays: u32,
    perspective: Perspective,
    exploration_constant: f64,
) -> f64 {
    if child_plays == 0 {
        return f64::INFINITY;
    }
    let plays = child_plays as f64;
    let wins = match perspective {
        Perspective::Agent => child_wins as f64,
        Perspective::Opponent => plays - child_wins as f64,
    };
    let exploration = (2.0 * (parent_plays as f64).ln() / plays).sqrt();
    wins / plays + exploration_constant * exploration
}

/// Picks the child of `node` with the highest UCT score.
///
/// Ties go to the first child in expansion order. Selecting from a node with
/// no plays or no children is a bug in the caller.
pub fn select_best_child<S, M>(
    store: &NodeStore<S, M>,
    node: NodeId,
    perspective: Perspective,
    exploration_constant: f64,
) -> Result<NodeId> {
    let parent = store.get(node);
    if parent.plays == 0 {
        return Err(MctsError::Invariant(format!(
            "UCT selection on node {} with zero plays",
            node.index()
        )));
    }

    let mut best: Option<(NodeId, f64)> = None;
    for &(_, child_id) in &parent.children {
        let child = store.get(child_id);
        let value = uct_value(
            child.wins,
            child.plays,
            parent.plays,
            perspective,
            exploration_constant,
        );
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((child_id, value)),
        }
    }

    best.map(|(id, _)| id).ok_or_else(|| {
        MctsError::Invariant(format!(
            "UCT selection on node {} with no children",
            node.index()
        ))
    })
}
