use std::fmt;

use versus_core::{Result, VersusError};

/// A board square as (file, rank), both 0-7. a1 is (0, 0), h8 is (7, 7).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    /// Create a square from file and rank indices, if on the board.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { file, rank })
    }

    /// Parse algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank)
        {
            return None;
        }
        Self::new(file as u8 - b'a', rank as u8 - b'1')
    }

    /// The square `(df, dr)` steps away, if still on the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

/// A chess move as a pair of board coordinates.
///
/// Castling is the king's two-square move and en passant is the pawn's
/// diagonal move onto the en passant square. Promotion is always to a queen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Parse coordinate notation (e.g., "e2e4").
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || VersusError::InvalidMove(s.to_string());
        if s.len() != 4 || !s.is_ascii() {
            return Err(invalid());
        }
        let from = Square::from_algebraic(&s[0..2]).ok_or_else(invalid)?;
        let to = Square::from_algebraic(&s[2..4]).ok_or_else(invalid)?;
        Ok(Self { from, to })
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
