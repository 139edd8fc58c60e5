//! Table-driven oracle for unit tests.
//!
//! States are small integers and the whole game graph is spelled out, so a
//! test can say exactly which positions exist and how they connect.

use crate::game::oracle::{Action, GameOracle, Outcome};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
    /// Not a player of the game; only used to break the oracle contract.
    Ghost,
}

#[derive(Debug, Clone)]
struct Vertex {
    to_move: Side,
    outcome: Outcome<Side>,
    moves: Vec<(char, u32)>,
    pass_to: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct GraphOracle {
    vertices: HashMap<u32, Vertex>,
}

impl GraphOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unfinished position with the given outgoing moves.
    pub fn open(mut self, state: u32, to_move: Side, moves: &[(char, u32)]) -> Self {
        self.vertices.insert(
            state,
            Vertex {
                to_move,
                outcome: Outcome::Ongoing,
                moves: moves.to_vec(),
                pass_to: None,
            },
        );
        self
    }

    /// Unfinished position where `to_move` has nothing to play.
    pub fn pass(mut self, state: u32, to_move: Side, pass_to: u32) -> Self {
        self.vertices.insert(
            state,
            Vertex {
                to_move,
                outcome: Outcome::Ongoing,
                moves: Vec::new(),
                pass_to: Some(pass_to),
            },
        );
        self
    }

    pub fn terminal(mut self, state: u32, to_move: Side, outcome: Outcome<Side>) -> Self {
        self.vertices.insert(
            state,
            Vertex {
                to_move,
                outcome,
                moves: Vec::new(),
                pass_to: None,
            },
        );
        self
    }

    /// Root 0 (Black to move): `a` wins for Black, `b` wins for White.
    pub fn two_ply() -> Self {
        Self::new()
            .open(0, Side::Black, &[('a', 1), ('b', 2)])
            .terminal(1, Side::White, Outcome::Won(Side::Black))
            .terminal(2, Side::White, Outcome::Won(Side::White))
    }

    /// `a` leads to a position where White must pass before Black continues.
    pub fn with_pass() -> Self {
        Self::new()
            .open(0, Side::Black, &[('a', 1), ('b', 2)])
            .pass(1, Side::White, 3)
            .terminal(2, Side::White, Outcome::Won(Side::White))
            .open(3, Side::Black, &[('c', 4), ('d', 5)])
            .terminal(4, Side::White, Outcome::Won(Side::Black))
            .terminal(5, Side::White, Outcome::Draw)
    }

    /// Two move orders (`a` then `c`, `b` then `c`) reach the same state 3.
    pub fn transposition() -> Self {
        Self::new()
            .open(0, Side::Black, &[('a', 1), ('b', 2)])
            .open(1, Side::White, &[('c', 3)])
            .open(2, Side::White, &[('c', 3)])
            .terminal(3, Side::Black, Outcome::Won(Side::Black))
    }

    /// States 0 and 1 lead back into each other.
    pub fn cycle() -> Self {
        Self::new()
            .open(0, Side::Black, &[('a', 1)])
            .open(1, Side::White, &[('a', 0)])
    }

    /// Black to move with three moves, each ending the game at once.
    pub fn three_way() -> Self {
        Self::new()
            .open(0, Side::Black, &[('a', 1), ('b', 2), ('c', 3)])
            .terminal(1, Side::White, Outcome::Won(Side::Black))
            .terminal(2, Side::White, Outcome::Won(Side::White))
            .terminal(3, Side::White, Outcome::Draw)
    }

    fn vertex(&self, state: u32) -> &Vertex {
        &self.vertices[&state]
    }
}

impl GameOracle for GraphOracle {
    type State = u32;
    type Move = char;
    type Player = Side;

    fn legal_moves(&self, state: &u32) -> Vec<char> {
        self.vertex(*state).moves.iter().map(|(mv, _)| *mv).collect()
    }

    fn winner(&self, state: &u32) -> Outcome<Side> {
        self.vertex(*state).outcome
    }

    fn next_state(&self, state: &u32, action: &Action<char>) -> u32 {
        let vertex = self.vertex(*state);
        match action {
            Action::Play(mv) => vertex
                .moves
                .iter()
                .find(|(m, _)| m == mv)
                .map(|(_, next)| *next)
                .unwrap_or_else(|| panic!("move {mv} is not legal in state {state}")),
            Action::Pass => vertex
                .pass_to
                .unwrap_or_else(|| panic!("state {state} has no pass transition")),
        }
    }

    fn to_move(&self, state: &u32) -> Side {
        self.vertex(*state).to_move
    }

    fn opponent(&self, player: Side) -> Side {
        match player {
            Side::Black => Side::White,
            Side::White => Side::Black,
            Side::Ghost => Side::Ghost,
        }
    }
}
