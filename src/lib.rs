//! # UCT Engine
//!
//! A Monte Carlo Tree Search decision engine for deterministic, perfect-information,
//! two-player zero-sum board games.
//!
//! ## Features
//!
//! - **Game Oracle**: the trait a rules engine implements to be searchable
//! - **MCTS Engine**: UCT selection, single-child expansion, random rollouts and
//!   backpropagation under a wall-clock budget, with tree reuse between decisions
//! - **Agents**: a common `decide` / `reset` / `observe_result` interface with an
//!   MCTS agent and a uniform random baseline
//! - **Arena**: plays complete games between two agents
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uct_engine::{
//!     agent::Agent,
//!     game::tictactoe::{Mark, TicTacToe},
//!     mcts::{MctsAgent, MctsConfig},
//! };
//!
//! let config = MctsConfig { sim_time_secs: 0.5, ..MctsConfig::default() };
//! let mut agent = MctsAgent::new(TicTacToe, Mark::X, config).unwrap();
//! let board = TicTacToe::initial_state();
//! let chosen = agent.decide(&board).unwrap();
//! println!("{:?}", chosen);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Agent capability interface and the random baseline
pub mod agent;

/// Plays complete games between two agents
pub mod arena;

/// Injectable wall-clock sources
pub mod clock;

/// Game oracle abstraction and the reference tic-tac-toe oracle
pub mod game;

/// Logger bootstrap for binaries
pub mod logging;

/// Monte Carlo Tree Search engine
pub mod mcts;

// ============================================================================
// INTERNAL MODULES (not exposed publicly)
// ============================================================================

#[cfg(test)]
mod test_support;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use agent::{Agent, RandomAgent};
pub use clock::{Clock, SteppingClock, SystemClock};
pub use game::oracle::{Action, GameOracle, Outcome};
pub use mcts::{MctsAgent, MctsConfig, SearchReport};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the engine.
///
/// Every variant is a defect or a misconfiguration; the engine has no
/// transient failure modes to retry.
#[derive(Debug, thiserror::Error)]
pub enum MctsError {
    /// The game oracle returned something outside its contract.
    #[error("Oracle contract violation: {0}")]
    OracleContract(String),

    /// The search tree reached a state its own bookkeeping forbids.
    #[error("Internal invariant violated: {0}")]
    Invariant(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MctsError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
