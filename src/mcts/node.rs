//! Search tree nodes.
//!
//! Nodes live in the arena owned by [`NodeStore`](crate::mcts::node_store::NodeStore)
//! and refer to each other through [`NodeId`] indices, so parent links are
//! plain integers and re-rooting is a single field write.

use crate::game::oracle::Action;
use std::collections::HashSet;

/// Stable index of a node inside its store's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A game state reached during search, with its rollout statistics.
#[derive(Debug, Clone)]
pub struct Node<S, M> {
    /// The state this node stands for; also its key in the store
    pub(crate) game_state: S,

    /// Action that led here from `parent`, `None` for the root
    pub(crate) action: Option<Action<M>>,

    /// Number of rollouts that passed through this node
    pub(crate) plays: u32,

    /// Reward collected by those rollouts, always from the deciding agent's side
    pub(crate) wins: u32,

    /// Outgoing edges in expansion order
    pub(crate) children: Vec<(Action<M>, NodeId)>,

    /// Node this one was reached from, `None` for the current root
    pub(crate) parent: Option<NodeId>,

    /// Actions already expanded into children
    pub(crate) moves_tried: HashSet<Action<M>>,

    /// Legal actions here: the oracle's moves, or a lone `Pass`
    pub(crate) legal_moves: Vec<Action<M>>,

    /// Whether the oracle declared the game over at this state
    pub(crate) terminal: bool,
}

impl<S, M> Node<S, M>
where
    M: Clone + Eq + std::hash::Hash,
{
    pub(crate) fn new(game_state: S, legal_moves: Vec<Action<M>>, terminal: bool) -> Self {
        Node {
            game_state,
            action: None,
            plays: 0,
            wins: 0,
            children: Vec::new(),
            parent: None,
            moves_tried: HashSet::new(),
            legal_moves,
            terminal,
        }
    }

    pub fn game_state(&self) -> &S {
        &self.game_state
    }

    pub fn action(&self) -> Option<&Action<M>> {
        self.action.as_ref()
    }

    pub fn plays(&self) -> u32 {
        self.plays
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[(Action<M>, NodeId)] {
        &self.children
    }

    pub fn legal_moves(&self) -> &[Action<M>] {
        &self.legal_moves
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Fraction of rollouts through this node the agent won, 0 when unvisited.
    pub fn win_rate(&self) -> f64 {
        if self.plays == 0 {
            0.0
        } else {
            self.wins as f64 / self.plays as f64
        }
    }

    /// True when the only thing to do here is pass the turn.
    pub fn is_forced_pass(&self) -> bool {
        matches!(self.legal_moves.as_slice(), [Action::Pass])
    }

    /// True once every legal action has a child.
    pub fn is_fully_expanded(&self) -> bool {
        self.children.len() >= self.legal_moves.len()
    }

    pub fn has_tried(&self, action: &Action<M>) -> bool {
        self.moves_tried.contains(action)
    }

    /// Legal actions that have no child yet, in oracle order.
    pub fn untried_moves(&self) -> Vec<Action<M>> {
        self.legal_moves
            .iter()
            .filter(|action| !self.moves_tried.contains(action))
            .cloned()
            .collect()
    }

    /// Child reached by `action`, if it was expanded.
    pub fn child_for(&self, action: &Action<M>) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(edge, _)| edge == action)
            .map(|(_, id)| *id)
    }
}
