//! Tic-tac-toe as a [`GameOracle`].
//!
//! Small enough to search exhaustively, which makes it a good fixture for
//! checking that the engine plays sensibly. Cells are numbered 0..9 row by row.

use crate::game::oracle::{Action, GameOracle, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Option<Mark>; 9],
    pub to_move: Mark,
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Stateless rules object; all the game lives in [`Board`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl TicTacToe {
    /// Empty board, X to move.
    pub fn initial_state() -> Board {
        Board {
            cells: [None; 9],
            to_move: Mark::X,
        }
    }

    /// Builds a board from a 9-character string of `X`, `O` and `.`.
    /// Returns `None` on any other character or a wrong length.
    pub fn parse(cells: &str, to_move: Mark) -> Option<Board> {
        if cells.chars().count() != 9 {
            return None;
        }
        let mut board = Board {
            cells: [None; 9],
            to_move,
        };
        for (i, c) in cells.chars().enumerate() {
            board.cells[i] = match c {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' => None,
                _ => return None,
            };
        }
        Some(board)
    }

    fn line_winner(board: &Board) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let first = board.cells[line[0]]?;
            line.iter()
                .all(|&i| board.cells[i] == Some(first))
                .then_some(first)
        })
    }
}

impl GameOracle for TicTacToe {
    type State = Board;
    type Move = usize;
    type Player = Mark;

    fn legal_moves(&self, state: &Board) -> Vec<usize> {
        if Self::line_winner(state).is_some() {
            return Vec::new();
        }
        state
            .cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.is_none().then_some(i))
            .collect()
    }

    fn winner(&self, state: &Board) -> Outcome<Mark> {
        match Self::line_winner(state) {
            Some(mark) => Outcome::Won(mark),
            None if state.cells.iter().all(Option::is_some) => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }

    fn next_state(&self, state: &Board, action: &Action<usize>) -> Board {
        let mut next = state.clone();
        if let Action::Play(cell) = action {
            next.cells[*cell] = Some(state.to_move);
        }
        next.to_move = state.to_move.other();
        next
    }

    fn to_move(&self, state: &Board) -> Mark {
        state.to_move
    }

    fn opponent(&self, player: Mark) -> Mark {
        player.other()
    }
}
