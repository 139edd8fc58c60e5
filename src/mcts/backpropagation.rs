//! Statistic updates after a rollout and the final move choice.

use crate::game::oracle::Action;
use crate::mcts::node::NodeId;
use crate::mcts::node_store::NodeStore;
use crate::mcts::rollout::WIN_PRIZE;
use crate::{MctsError, Result};
use rand::prelude::*;

/// Adds one play and `reward` wins to `node` and every ancestor up to the root.
///
/// The walk follows parent links until it finds a node without a parent. More
/// steps than there are nodes means the links loop, which the store should
/// have prevented. A reward above [`WIN_PRIZE`] would let wins outgrow plays
/// and is refused before anything is touched.
pub fn backpropagate<S, M>(store: &mut NodeStore<S, M>, node: NodeId, reward: u32) -> Result<()> {
    if reward > WIN_PRIZE {
        return Err(MctsError::Invariant(format!(
            "reward {} exceeds the win prize {}",
            reward, WIN_PRIZE
        )));
    }
    let mut current = Some(node);
    let mut steps = 0;

    while let Some(id) = current {
        steps += 1;
        if steps > store.len() {
            return Err(MctsError::Invariant(format!(
                "parent chain from node {} does not reach a root",
                node.index()
            )));
        }
        let entry = store.get_mut(id);
        entry.plays += 1;
        entry.wins += reward;
        current = entry.parent;
    }
    Ok(())
}

/// Robust child: the most played child of `node`.
///
/// Ties on plays go to the child with more wins; ties on both are broken at
/// random. Returns `None` for a node without children.
pub fn best_action<S, M, R>(store: &NodeStore<S, M>, node: NodeId, rng: &mut R) -> Option<Action<M>>
where
    M: Clone,
    R: Rng + ?Sized,
{
    let mut best: Vec<&Action<M>> = Vec::new();
    let mut best_key = (0u32, 0u32);

    for (action, child_id) in &store.get(node).children {
        let child = store.get(*child_id);
        let key = (child.plays, child.wins);
        if best.is_empty() || key > best_key {
            best_key = key;
            best.clear();
            best.push(action);
        } else if key == best_key {
            best.push(action);
        }
    }

    best.choose(rng).map(|&action| action.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::GraphOracle;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_backpropagate_updates_whole_path() {
        let oracle = GraphOracle::with_pass();
        let mut store = NodeStore::new();
        let root = store.get_or_create(&oracle, &0);
        let pass_node = store.add_child(&oracle, root, Action::Play('a')).unwrap();
        let after_pass = store.add_child(&oracle, pass_node, Action::Pass).unwrap();
        let leaf = store.add_child(&oracle, after_pass, Action::Play('c')).unwrap();

        backpropagate(&mut store, leaf, 1).unwrap();
        backpropagate(&mut store, leaf, 0).unwrap();

        for id in [root, pass_node, after_pass, leaf] {
            assert_eq!(store.get(id).plays(), 2);
            assert_eq!(store.get(id).wins(), 1);
        }
    }

    #[test]
    fn test_backpropagate_stops_at_root() {
        let oracle = GraphOracle::two_ply();
        let mut store = NodeStore::new();
        let root = store.get_or_create(&oracle, &0);
        let a = store.add_child(&oracle, root, Action::Play('a')).unwrap();
        let b = store.add_child(&oracle, root, Action::Play('b')).unwrap();

        backpropagate(&mut store, a, 1).unwrap();
        assert_eq!(store.get(root).plays(), 1);
        assert_eq!(store.get(b).plays(), 0);
    }

    #[test]
    fn test_backpropagate_detects_looping_parents() {
        let oracle = GraphOracle::cycle();
        let mut store = NodeStore::new();
        let root = store.get_or_create(&oracle, &0);
        let child = store.add_child(&oracle, root, Action::Play('a')).unwrap();
        // Forge a loop the store would refuse to build.
        store.get_mut(root).parent = Some(child);

        assert_matches!(backpropagate(&mut store, child, 1), Err(MctsError::Invariant(_)));
    }

    #[test]
    fn test_backpropagate_rejects_oversized_reward() {
        let oracle = GraphOracle::two_ply();
        let mut store = NodeStore::new();
        let root = store.get_or_create(&oracle, &0);
        let a = store.add_child(&oracle, root, Action::Play('a')).unwrap();

        assert_matches!(backpropagate(&mut store, a, 2), Err(MctsError::Invariant(_)));
        assert_eq!(store.get(a).plays(), 0);
        assert_eq!(store.get(root).wins(), 0);
    }

    #[test]
    fn test_robust_child_prefers_visits_over_rate() {
        let oracle = GraphOracle::two_ply();
        let mut store = NodeStore::new();
        let root = store.get_or_create(&oracle, &0);
        let a = store.add_child(&oracle, root, Action::Play('a')).unwrap();
        let b = store.add_child(&oracle, root, Action::Play('b')).unwrap();
        store.get_mut(a).plays = 10;
        store.get_mut(a).wins = 9;
        store.get_mut(b).plays = 50;
        store.get_mut(b).wins = 20;

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(best_action(&store, root, &mut rng), Some(Action::Play('b')));
    }

    #[test]
    fn test_robust_child_breaks_play_ties_with_wins() {
        let oracle = GraphOracle::two_ply();
        let mut store = NodeStore::new();
        let root = store.get_or_create(&oracle, &0);
        let a = store.add_child(&oracle, root, Action::Play('a')).unwrap();
        let b = store.add_child(&oracle, root, Action::Play('b')).unwrap();
        store.get_mut(a).plays = 5;
        store.get_mut(a).wins = 1;
        store.get_mut(b).plays = 5;
        store.get_mut(b).wins = 4;

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(best_action(&store, root, &mut rng), Some(Action::Play('b')));
    }

    #[test]
    fn test_robust_child_full_tie_picks_among_tied() {
        let oracle = GraphOracle::three_way();
        let mut store = NodeStore::new();
        let root = store.get_or_create(&oracle, &0);
        for mv in ['a', 'b', 'c'] {
            let id = store.add_child(&oracle, root, Action::Play(mv)).unwrap();
            store.get_mut(id).plays = 3;
            store.get_mut(id).wins = if mv == 'c' { 0 } else { 2 };
        }

        let mut seen = std::collections::HashSet::new();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            seen.insert(best_action(&store, root, &mut rng).unwrap());
        }
        assert!(seen.contains(&Action::Play('a')));
        assert!(seen.contains(&Action::Play('b')));
        assert!(!seen.contains(&Action::Play('c')));
    }

    #[test]
    fn test_robust_child_without_children() {
        let oracle = GraphOracle::two_ply();
        let mut store = NodeStore::new();
        let root = store.get_or_create(&oracle, &0);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(best_action(&store, root, &mut rng), None);
    }
}
