use crate::game::oracle::Action;
use std::time::Duration;

/// Statistics of one root child after a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildStats<M> {
    pub action: Action<M>,
    pub wins: u32,
    pub plays: u32,
}

/// Outcome of one `search` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport<M> {
    /// Robust child of the root, `None` when the root has no move to offer
    pub best_move: Option<M>,
    /// Completed select/simulate/backpropagate cycles
    pub iterations: u64,
    pub elapsed: Duration,
    pub root_plays: u32,
    pub root_wins: u32,
    /// Root children in expansion order
    pub children: Vec<ChildStats<M>>,
}

impl<M> SearchReport<M> {
    /// Report for a position with no legal move: nothing was searched.
    pub fn empty() -> Self {
        SearchReport {
            best_move: None,
            iterations: 0,
            elapsed: Duration::ZERO,
            root_plays: 0,
            root_wins: 0,
            children: Vec::new(),
        }
    }

    pub fn stats_for(&self, action: &Action<M>) -> Option<&ChildStats<M>>
    where
        M: PartialEq,
    {
        self.children.iter().find(|stats| &stats.action == action)
    }
}
