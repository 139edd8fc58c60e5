pub mod algorithm;
pub mod backpropagation;
pub mod hyperparameters;
pub mod mcts_result;
pub mod node;
pub mod node_store;
pub mod rollout;
pub mod selection;

pub use algorithm::MctsAgent;
pub use hyperparameters::MctsConfig;
pub use mcts_result::{ChildStats, SearchReport};
pub use node::{Node, NodeId};
pub use node_store::NodeStore;
