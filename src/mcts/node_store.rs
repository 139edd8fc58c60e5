//! State-keyed node arena.
//!
//! The store is the only place nodes are created. It keeps a `HashMap` from
//! game state to [`NodeId`], so reaching a state twice (by transposition, or
//! in a later decision of the same game) always lands on the same node and
//! its accumulated statistics.

use crate::game::oracle::{Action, GameOracle};
use crate::mcts::node::{Node, NodeId};
use crate::{MctsError, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct NodeStore<S, M> {
    nodes: Vec<Node<S, M>>,
    index: HashMap<S, NodeId>,
}

impl<S, M> Default for NodeStore<S, M> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S, M> NodeStore<S, M>
where
    S: Clone + Eq + Hash,
    M: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `state`, creating it on first sight.
    ///
    /// An existing node is returned untouched. A new node gets its legal
    /// moves from the oracle; a side with no move in an unfinished game gets
    /// a single `Pass`.
    pub fn get_or_create<G>(&mut self, oracle: &G, state: &S) -> NodeId
    where
        G: GameOracle<State = S, Move = M>,
    {
        if let Some(&id) = self.index.get(state) {
            return id;
        }

        let terminal = oracle.winner(state).is_over();
        let legal_moves = if terminal {
            Vec::new()
        } else {
            let moves = oracle.legal_moves(state);
            if moves.is_empty() {
                vec![Action::Pass]
            } else {
                moves.into_iter().map(Action::Play).collect()
            }
        };

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(state.clone(), legal_moves, terminal));
        self.index.insert(state.clone(), id);
        id
    }

    /// Expands `action` from `parent` and links the child under it.
    ///
    /// Trying an action twice returns the child from the first time.
    pub fn add_child<G>(&mut self, oracle: &G, parent: NodeId, action: Action<M>) -> Result<NodeId>
    where
        G: GameOracle<State = S, Move = M>,
    {
        if let Some(existing) = self.get(parent).child_for(&action) {
            return Ok(existing);
        }
        if !self.get(parent).legal_moves.contains(&action) {
            return Err(MctsError::Invariant(format!(
                "node {} has no legal action {:?}",
                parent.index(),
                action
            )));
        }

        let next = oracle.next_state(&self.get(parent).game_state, &action);
        let child = self.get_or_create(oracle, &next);
        self.link(parent, child, action.clone())?;

        let parent_node = self.get_mut(parent);
        parent_node.children.push((action.clone(), child));
        parent_node.moves_tried.insert(action);
        Ok(child)
    }

    /// Points `child`'s parent link at `parent`.
    ///
    /// Refuses links that would make the parent chain loop back on itself,
    /// since backpropagation walks that chain to the root.
    pub(crate) fn link(&mut self, parent: NodeId, child: NodeId, action: Action<M>) -> Result<()> {
        if self.get(child).parent == Some(parent) {
            return Ok(());
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(MctsError::Invariant(format!(
                "linking node {} under node {} would create a cycle",
                child.index(),
                parent.index()
            )));
        }
        let node = self.get_mut(child);
        node.parent = Some(parent);
        node.action = Some(action);
        Ok(())
    }

    /// Makes `id` the search root: no parent, no incoming action.
    pub fn promote_to_root(&mut self, id: NodeId) {
        let node = self.get_mut(id);
        node.parent = None;
        node.action = None;
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut node: NodeId) -> bool {
        for _ in 0..=self.nodes.len() {
            if node == candidate {
                return true;
            }
            match self.get(node).parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
        true
    }

    pub fn lookup(&self, state: &S) -> Option<NodeId> {
        self.index.get(state).copied()
    }
}

impl<S, M> NodeStore<S, M> {
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node<S, M> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<S, M> {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node, e.g. between two games.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<S, M>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }
}
