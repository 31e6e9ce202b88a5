//! Connect Four rules.
//!
//! Players drop discs into a 7-column, 6-row grid. The first to line up four
//! discs horizontally, vertically or diagonally wins.
//!
//! # Board Layout
//!
//! Rows are stored bottom-up, row 0 is where discs land first:
//! ```text
//! Row 5: [.][.][.][.][.][.][.]  <- Top
//! ...
//! Row 0: [.][.][.][.][.][.][.]  <- Bottom
//!         0  1  2  3  4  5  6
//! ```

use std::fmt;

use versus_core::{GameState, OrderHint, Player, Result, VersusError};

/// Board dimensions
pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Columns in the order moves are generated: center first, then outwards.
const COLUMN_ORDER: [u8; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Window scores used by the static evaluation.
const TWO_IN_WINDOW: f64 = 15.0;
const THREE_IN_WINDOW: f64 = 50.0;

/// A Connect Four move: the column a disc is dropped into.
pub type Column = u8;

/// Board snapshot, `[row][col]` with row 0 at the bottom.
pub type Grid = [[Option<Player>; COLS]; ROWS];

/// Connect Four position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Connect4 {
    grid: Grid,
}

impl Connect4 {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            grid: [[None; COLS]; ROWS],
        }
    }

    /// Build a position from rows written top row first.
    ///
    /// `X`/`1` is player one, `O`/`2` is player two and `.` is empty.
    /// Every row must be exactly seven cells wide and discs may not float.
    ///
    /// ```
    /// use versus_games::Connect4;
    ///
    /// let game = Connect4::from_rows(&[
    ///     ".......",
    ///     ".......",
    ///     ".......",
    ///     ".......",
    ///     ".......",
    ///     "XXX.OO.",
    /// ])
    /// .unwrap();
    /// assert_eq!(game.disc_count(), 5);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        if rows.len() != ROWS {
            return Err(VersusError::InvalidBoard(format!(
                "expected {} rows, got {}",
                ROWS,
                rows.len()
            )));
        }

        let mut grid = [[None; COLS]; ROWS];
        for (i, line) in rows.iter().enumerate() {
            let row = ROWS - 1 - i;
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != COLS {
                return Err(VersusError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    cells.len(),
                    COLS
                )));
            }
            for (col, c) in cells.into_iter().enumerate() {
                grid[row][col] = match c {
                    'X' | 'x' | '1' => Some(Player::One),
                    'O' | 'o' | '2' => Some(Player::Two),
                    '.' | ' ' | '0' => None,
                    other => {
                        return Err(VersusError::InvalidBoard(format!(
                            "unexpected cell '{}' in row {}",
                            other, i
                        )))
                    }
                };
            }
        }

        for col in 0..COLS {
            for row in 1..ROWS {
                if grid[row][col].is_some() && grid[row - 1][col].is_none() {
                    return Err(VersusError::InvalidBoard(format!(
                        "floating disc in column {}",
                        col
                    )));
                }
            }
        }

        Ok(Self { grid })
    }

    /// Disc at `(row, col)`, row 0 at the bottom.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.grid.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Number of discs on the board.
    pub fn disc_count(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Player whose turn it is, derived from the disc count.
    pub fn to_move(&self) -> Player {
        if self.disc_count() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).find(|&row| self.grid[row][col].is_none())
    }

    /// Every line of four cells on the board.
    fn windows(&self) -> impl Iterator<Item = [Option<Player>; 4]> + '_ {
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

        DIRECTIONS.into_iter().flat_map(move |(dr, dc)| {
            (0..ROWS).flat_map(move |row| {
                (0..COLS).filter_map(move |col| {
                    let mut window = [None; 4];
                    for (i, cell) in window.iter_mut().enumerate() {
                        let r = row as isize + dr * i as isize;
                        let c = col as isize + dc * i as isize;
                        if r < 0 || r >= ROWS as isize || c < 0 || c >= COLS as isize {
                            return None;
                        }
                        *cell = self.grid[r as usize][c as usize];
                    }
                    Some(window)
                })
            })
        })
    }

    fn score_window(window: &[Option<Player>; 4], player: Player) -> f64 {
        let mine = window.iter().filter(|&&c| c == Some(player)).count();
        let theirs = window
            .iter()
            .filter(|&&c| c == Some(player.opponent()))
            .count();
        let empty = 4 - mine - theirs;

        if empty > 2 || (mine > 0 && theirs > 0) {
            return 0.0;
        }
        match (mine, theirs) {
            (2, 0) => TWO_IN_WINDOW,
            (0, 2) => -TWO_IN_WINDOW,
            (3, 0) => THREE_IN_WINDOW,
            (0, 3) => -THREE_IN_WINDOW,
            (4, 0) => f64::INFINITY,
            (0, 4) => f64::NEG_INFINITY,
            _ => 0.0,
        }
    }
}

impl Default for Connect4 {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for Connect4 {
    type Move = Column;
    type Board = Grid;

    fn board(&self) -> Grid {
        self.grid
    }

    fn valid_moves(&self) -> Vec<Column> {
        COLUMN_ORDER
            .into_iter()
            .filter(|&col| self.grid[ROWS - 1][col as usize].is_none())
            .collect()
    }

    fn make_move(&mut self, mv: Column, player: Player) -> bool {
        let col = mv as usize;
        if col >= COLS {
            return false;
        }
        match self.next_open_row(col) {
            Some(row) => {
                self.grid[row][col] = Some(player);
                true
            }
            None => false,
        }
    }

    fn is_terminal(&self) -> bool {
        self.check_win(Player::One) || self.check_win(Player::Two) || self.valid_moves().is_empty()
    }

    fn evaluate(&self, player: Player) -> f64 {
        if self.check_win(player) {
            return f64::INFINITY;
        }
        if self.check_win(player.opponent()) {
            return f64::NEG_INFINITY;
        }
        self.windows()
            .map(|window| Self::score_window(&window, player))
            .sum()
    }

    fn check_win(&self, player: Player) -> bool {
        self.windows()
            .any(|window| window.iter().all(|&c| c == Some(player)))
    }

    fn order_hint(&self, mv: Column) -> OrderHint {
        OrderHint::Positional {
            index: mv as u32,
            width: COLS as u32,
        }
    }
}

impl fmt::Display for Connect4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            write!(f, "|")?;
            for col in 0..COLS {
                match self.grid[row][col] {
                    Some(Player::One) => write!(f, " X |")?,
                    Some(Player::Two) => write!(f, " O |")?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "|")?;
        for col in 0..COLS {
            write!(f, " {} |", col)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_moves_are_center_first() {
        let game = Connect4::new();
        assert_eq!(game.valid_moves(), vec![3, 2, 4, 1, 5, 0, 6]);
        assert!(!game.is_terminal());
        assert_eq!(game.evaluate(Player::One), 0.0);
    }

    #[test]
    fn test_discs_stack_in_column() {
        let mut game = Connect4::new();
        assert!(game.make_move(3, Player::One));
        assert!(game.make_move(3, Player::Two));

        assert_eq!(game.get(0, 3), Some(Player::One));
        assert_eq!(game.get(1, 3), Some(Player::Two));
        assert_eq!(game.to_move(), Player::One);
    }

    #[test]
    fn test_full_column_rejected() {
        let mut game = Connect4::new();
        for i in 0..ROWS {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            assert!(game.make_move(0, player));
        }
        let before = game.clone();

        assert!(!game.make_move(0, Player::One));
        assert_eq!(game, before);
        assert!(!game.valid_moves().contains(&0));
    }

    #[test]
    fn test_out_of_range_column_rejected() {
        let mut game = Connect4::new();
        assert!(!game.make_move(7, Player::One));
        assert_eq!(game.disc_count(), 0);
    }

    #[test]
    fn test_horizontal_win_scores_infinite() {
        let game = Connect4::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "OOO....",
            "XXXX...",
        ])
        .unwrap();

        assert!(game.check_win(Player::One));
        assert!(!game.check_win(Player::Two));
        assert!(game.is_terminal());
        assert_eq!(game.evaluate(Player::One), f64::INFINITY);
        assert_eq!(game.evaluate(Player::Two), f64::NEG_INFINITY);
    }

    #[test]
    fn test_vertical_and_diagonal_wins() {
        let vertical = Connect4::from_rows(&[
            ".......",
            ".......",
            "O......",
            "O......",
            "OX.....",
            "OXX....",
        ])
        .unwrap();
        assert!(vertical.check_win(Player::Two));

        let diagonal = Connect4::from_rows(&[
            ".......",
            ".......",
            "...X...",
            "..XO...",
            ".XOO...",
            "XOOX...",
        ])
        .unwrap();
        assert!(diagonal.check_win(Player::One));

        let anti_diagonal = Connect4::from_rows(&[
            ".......",
            ".......",
            "O......",
            "XO.....",
            "XXO....",
            "XXXO...",
        ])
        .unwrap();
        assert!(anti_diagonal.check_win(Player::Two));
    }

    #[test]
    fn test_open_three_scores_window() {
        let game = Connect4::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXX....",
        ])
        .unwrap();

        // Windows 0-3 hold three discs; 1-4 hold two.
        assert_eq!(game.evaluate(Player::One), THREE_IN_WINDOW + TWO_IN_WINDOW);
        assert_eq!(game.evaluate(Player::Two), -(THREE_IN_WINDOW + TWO_IN_WINDOW));
    }

    #[test]
    fn test_full_board_draw_evaluates_to_zero() {
        let game = Connect4::from_rows(&[
            "OXOXOXO",
            "OXOXOXO",
            "XOXOXOX",
            "XOXOXOX",
            "OXOXOXO",
            "OXOXOXO",
        ])
        .unwrap();

        assert!(!game.check_win(Player::One));
        assert!(!game.check_win(Player::Two));
        assert!(game.valid_moves().is_empty());
        assert!(game.is_terminal());
        assert_eq!(game.evaluate(Player::One), 0.0);
        assert_eq!(game.evaluate(Player::Two), 0.0);
    }

    #[test]
    fn test_from_rows_rejects_floating_disc() {
        let result = Connect4::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "X......",
            ".......",
        ]);
        assert!(matches!(result, Err(VersusError::InvalidBoard(_))));
    }

    #[test]
    fn test_from_rows_rejects_bad_shape() {
        assert!(Connect4::from_rows(&["......."]).is_err());
        let result = Connect4::from_rows(&[
            ".......", ".......", ".......", ".......", ".......", "XX",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut game = Connect4::new();
        game.make_move(3, Player::One);
        let mut copy = game.clone();
        copy.make_move(3, Player::Two);

        assert_eq!(game.disc_count(), 1);
        assert_eq!(copy.disc_count(), 2);
    }

    #[test]
    fn test_order_hint_is_positional() {
        let game = Connect4::new();
        assert_eq!(
            game.order_hint(5),
            OrderHint::Positional { index: 5, width: 7 }
        );
    }

    #[test]
    fn test_display() {
        let mut game = Connect4::new();
        game.make_move(0, Player::One);
        game.make_move(1, Player::Two);

        let display = game.to_string();
        assert!(display.contains(" X "));
        assert!(display.contains(" O "));
        assert!(display.contains(" 6 |"));
    }
}
