//! Tic-tac-toe rules.
//!
//! Tic-tac-toe is small enough to search to the end from any position,
//! which makes it the reference game for checking that pruning and caching
//! never change a search result.

use std::fmt;

use versus_core::{GameState, Player};

/// The eight winning lines, as cell indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Tic-tac-toe move (cell index 0-8).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell(pub u8);

impl Cell {
    /// Get the row (0-2).
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    pub fn col(self) -> u8 {
        self.0 % 3
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// Tic-tac-toe position.
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TicTacToe {
    cells: [Option<Player>; 9],
}

impl TicTacToe {
    /// Create an empty board.
    pub fn new() -> Self {
        Self { cells: [None; 9] }
    }

    /// Get the mark at a cell, if any.
    pub fn get(&self, cell: usize) -> Option<Player> {
        self.cells.get(cell).copied().flatten()
    }

    /// Player whose turn it is, derived from the number of marks.
    pub fn to_move(&self) -> Player {
        if self.cells.iter().filter(|c| c.is_some()).count() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Check if the board is full (draw if no winner).
    fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Lines still winnable by `player`: at least one of their marks and
    /// none of the opponent's.
    fn open_lines(&self, player: Player) -> usize {
        LINES
            .iter()
            .filter(|line| {
                let mine = line.iter().any(|&i| self.cells[i] == Some(player));
                let blocked = line
                    .iter()
                    .any(|&i| self.cells[i] == Some(player.opponent()));
                mine && !blocked
            })
            .count()
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for TicTacToe {
    type Move = Cell;
    type Board = [Option<Player>; 9];

    fn board(&self) -> Self::Board {
        self.cells
    }

    fn valid_moves(&self) -> Vec<Cell> {
        if self.check_win(Player::One) || self.check_win(Player::Two) {
            return Vec::new();
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Cell(i as u8))
            .collect()
    }

    fn make_move(&mut self, mv: Cell, player: Player) -> bool {
        match self.cells.get_mut(mv.0 as usize) {
            Some(cell @ None) => {
                *cell = Some(player);
                true
            }
            _ => false,
        }
    }

    fn is_terminal(&self) -> bool {
        self.check_win(Player::One) || self.check_win(Player::Two) || self.is_full()
    }

    fn evaluate(&self, player: Player) -> f64 {
        if self.check_win(player) {
            f64::INFINITY
        } else if self.check_win(player.opponent()) {
            f64::NEG_INFINITY
        } else {
            self.open_lines(player) as f64 - self.open_lines(player.opponent()) as f64
        }
    }

    fn check_win(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Some(player)))
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, " | ")?;
                }
                match self.cells[row * 3 + col] {
                    Some(Player::One) => write!(f, " X ")?,
                    Some(Player::Two) => write!(f, " O ")?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
