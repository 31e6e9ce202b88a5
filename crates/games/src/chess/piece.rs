use std::fmt;

use versus_core::Player;

/// White moves first and is always `Player::One`.
pub const WHITE: Player = Player::One;
pub const BLACK: Player = Player::Two;

/// Direction of pawn movement (+1 for White, -1 for Black in terms of rank)
#[inline]
pub(crate) fn pawn_direction(color: Player) -> i8 {
    match color {
        Player::One => 1,
        Player::Two => -1,
    }
}

/// Starting rank for pawns (rank index 1 for White, 6 for Black)
#[inline]
pub(crate) fn pawn_start_rank(color: Player) -> u8 {
    match color {
        Player::One => 1,
        Player::Two => 6,
    }
}

/// Promotion rank for pawns (rank index 7 for White, 0 for Black)
#[inline]
pub(crate) fn promotion_rank(color: Player) -> u8 {
    match color {
        Player::One => 7,
        Player::Two => 0,
    }
}

/// Back rank (rank index 0 for White, 7 for Black)
#[inline]
pub(crate) fn back_rank(color: Player) -> u8 {
    match color {
        Player::One => 0,
        Player::Two => 7,
    }
}

/// A piece type (without color)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Material value used by evaluation and capture ordering.
    pub const fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight => 3,
            PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 100,
        }
    }

    /// Returns the FEN character for this piece type (uppercase)
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Parse piece type from FEN character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// A colored piece
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub color: Player,
    pub kind: PieceType,
}

impl Piece {
    pub const fn new(color: Player, kind: PieceType) -> Self {
        Self { color, kind }
    }

    /// FEN character: uppercase for White, lowercase for Black.
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        if self.color == WHITE {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }

    /// Parse a piece from its FEN character.
    pub fn from_char(c: char) -> Option<Self> {
        let kind = PieceType::from_char(c)?;
        let color = if c.is_ascii_uppercase() { WHITE } else { BLACK };
        Some(Self { color, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
