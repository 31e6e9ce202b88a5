//! Chess position: an 8x8 mailbox plus the rule state that goes with it.

use std::fmt;

use versus_core::{Player, Result, VersusError};

use super::piece::{back_rank, pawn_direction, promotion_rank, Piece, PieceType, BLACK, WHITE};
use super::square::{ChessMove, Square};

/// Board contents indexed `[rank][file]`, rank 0 is White's back rank.
pub type Squares = [[Option<Piece>; 8]; 8];

/// Castling rights encoded as a 4-bit value
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct CastlingRights(pub(crate) u8);

impl CastlingRights {
    pub const NONE: Self = Self(0);
    pub const WHITE_KINGSIDE: u8 = 1;
    pub const WHITE_QUEENSIDE: u8 = 2;
    pub const BLACK_KINGSIDE: u8 = 4;
    pub const BLACK_QUEENSIDE: u8 = 8;
    pub const ALL: Self = Self(15);

    fn kingside_flag(color: Player) -> u8 {
        match color {
            Player::One => Self::WHITE_KINGSIDE,
            Player::Two => Self::BLACK_KINGSIDE,
        }
    }

    fn queenside_flag(color: Player) -> u8 {
        match color {
            Player::One => Self::WHITE_QUEENSIDE,
            Player::Two => Self::BLACK_QUEENSIDE,
        }
    }

    /// Check if the given color can castle kingside
    pub fn can_castle_kingside(self, color: Player) -> bool {
        self.0 & Self::kingside_flag(color) != 0
    }

    /// Check if the given color can castle queenside
    pub fn can_castle_queenside(self, color: Player) -> bool {
        self.0 & Self::queenside_flag(color) != 0
    }

    /// Remove kingside castling rights for a color
    pub fn remove_kingside(&mut self, color: Player) {
        self.0 &= !Self::kingside_flag(color);
    }

    /// Remove queenside castling rights for a color
    pub fn remove_queenside(&mut self, color: Player) {
        self.0 &= !Self::queenside_flag(color);
    }

    /// Remove all castling rights for a color
    pub fn remove_all(&mut self, color: Player) {
        self.remove_kingside(color);
        self.remove_queenside(color);
    }

    /// Parse castling rights from FEN string (e.g., "KQkq", "Kq", "-")
    pub fn from_fen(s: &str) -> Option<Self> {
        if s == "-" {
            return Some(Self::NONE);
        }
        let mut rights = 0u8;
        for c in s.chars() {
            rights |= match c {
                'K' => Self::WHITE_KINGSIDE,
                'Q' => Self::WHITE_QUEENSIDE,
                'k' => Self::BLACK_KINGSIDE,
                'q' => Self::BLACK_QUEENSIDE,
                _ => return None,
            };
        }
        Some(Self(rights))
    }
}

/// A chess position.
///
/// Holds everything the rules read: piece placement, side to move, castling
/// rights, the en passant target, the fifty-move clock and the number of
/// plies played (evaluation rewards development during the opening).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Chess {
    pub(crate) squares: Squares,
    pub(crate) side_to_move: Player,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u16,
    pub(crate) plies: u16,
}

impl Chess {
    /// FEN of the standard starting position.
    pub const STARTING_FEN: &'static str =
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Create the starting position
    pub fn new() -> Self {
        let mut squares: Squares = [[None; 8]; 8];
        let back = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for (file, kind) in back.into_iter().enumerate() {
            squares[0][file] = Some(Piece::new(WHITE, kind));
            squares[1][file] = Some(Piece::new(WHITE, PieceType::Pawn));
            squares[6][file] = Some(Piece::new(BLACK, PieceType::Pawn));
            squares[7][file] = Some(Piece::new(BLACK, kind));
        }
        Self {
            squares,
            side_to_move: WHITE,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            plies: 0,
        }
    }

    /// Parse a position from FEN notation
    pub fn from_fen(fen: &str) -> Result<Self> {
        let invalid = |reason: String| VersusError::InvalidFen(format!("{}: {}", reason, fen));

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(invalid("FEN must have at least 4 parts".to_string()));
        }

        let mut squares: Squares = [[None; 8]; 8];
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid(format!("expected 8 ranks, got {}", ranks.len())));
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece =
                        Piece::from_char(c).ok_or_else(|| invalid(format!("invalid piece '{}'", c)))?;
                    if file >= 8 {
                        return Err(invalid(format!("too many files on rank {}", rank + 1)));
                    }
                    squares[rank][file] = Some(piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(invalid(format!("rank {} has {} files", rank + 1, file)));
            }
        }

        let side_to_move = match parts[1] {
            "w" => WHITE,
            "b" => BLACK,
            other => return Err(invalid(format!("invalid side to move '{}'", other))),
        };

        let castling = CastlingRights::from_fen(parts[2])
            .ok_or_else(|| invalid(format!("invalid castling rights '{}'", parts[2])))?;

        let en_passant = match parts[3] {
            "-" => None,
            sq => Some(
                Square::from_algebraic(sq)
                    .ok_or_else(|| invalid(format!("invalid en passant square '{}'", sq)))?,
            ),
        };

        let halfmove_clock = match parts.get(4) {
            Some(s) => s
                .parse()
                .map_err(|_| invalid(format!("invalid halfmove clock '{}'", s)))?,
            None => 0,
        };

        let fullmove_number: u16 = match parts.get(5) {
            Some(s) => s
                .parse()
                .map_err(|_| invalid(format!("invalid fullmove number '{}'", s)))?,
            None => 1,
        };
        let plies = fullmove_number
            .saturating_sub(1)
            .saturating_mul(2)
            .saturating_add(u16::from(side_to_move == BLACK));

        let pos = Self {
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            plies,
        };

        for color in Player::BOTH {
            if pos.king_square(color).is_none() {
                return Err(invalid(format!("{} has no king", color)));
            }
        }

        Ok(pos)
    }

    /// Get the piece on a square
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank as usize][sq.file as usize]
    }

    /// Get the side to move
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// Get the castling rights
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Get the en passant target square
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    /// Get the halfmove clock (for fifty-move rule)
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Number of plies played since the start of the game.
    pub fn plies(&self) -> u16 {
        self.plies
    }

    /// Find the king of the given color
    pub fn king_square(&self, color: Player) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceType::King)
            .map(|(sq, _)| sq)
    }

    /// Iterate over occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, cell)| {
                cell.map(|p| {
                    (
                        Square {
                            file: file as u8,
                            rank: rank as u8,
                        },
                        p,
                    )
                })
            })
        })
    }

    fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.rank as usize][sq.file as usize] = piece;
    }

    /// Play `mv` for `color` without any legality check.
    pub(crate) fn apply(&mut self, mv: ChessMove, color: Player) {
        let Some(mut piece) = self.piece_at(mv.from) else {
            return;
        };
        let captured = self.piece_at(mv.to);
        let previous_en_passant = self.en_passant.take();

        let mut is_capture = captured.is_some();

        match piece.kind {
            PieceType::Pawn => {
                let dir = pawn_direction(color);
                if (mv.to.rank as i8 - mv.from.rank as i8).abs() == 2 {
                    self.en_passant = mv.from.offset(0, dir);
                } else if Some(mv.to) == previous_en_passant && mv.from.file != mv.to.file {
                    self.set(Square { file: mv.to.file, rank: mv.from.rank }, None);
                    is_capture = true;
                }
                if mv.to.rank == promotion_rank(color) {
                    piece.kind = PieceType::Queen;
                }
            }
            PieceType::King => {
                self.castling.remove_all(color);
                let rank = back_rank(color);
                if mv.from.file == 4 && mv.to.file == 6 {
                    self.set(Square { file: 7, rank }, None);
                    self.set(Square { file: 5, rank }, Some(Piece::new(color, PieceType::Rook)));
                } else if mv.from.file == 4 && mv.to.file == 2 {
                    self.set(Square { file: 0, rank }, None);
                    self.set(Square { file: 3, rank }, Some(Piece::new(color, PieceType::Rook)));
                }
            }
            PieceType::Rook => self.revoke_rook_right(mv.from, color),
            _ => {}
        }

        if let Some(victim) = captured {
            if victim.kind == PieceType::Rook {
                self.revoke_rook_right(mv.to, victim.color);
            }
        }

        if piece.kind == PieceType::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.set(mv.to, Some(piece));
        self.set(mv.from, None);
        self.side_to_move = color.opponent();
        self.plies = self.plies.saturating_add(1);
    }

    /// A rook leaving (or captured on) its corner loses that side's castling.
    fn revoke_rook_right(&mut self, sq: Square, color: Player) {
        if sq.rank != back_rank(color) {
            return;
        }
        match sq.file {
            0 => self.castling.remove_queenside(color),
            7 => self.castling.remove_kingside(color),
            _ => {}
        }
    }

    /// True when neither side can possibly mate: bare kings, or king and a
    /// single minor piece against a bare king.
    pub fn insufficient_material(&self) -> bool {
        let others: Vec<PieceType> = self
            .pieces()
            .map(|(_, p)| p.kind)
            .filter(|&k| k != PieceType::King)
            .collect();
        match others.as_slice() {
            [] => true,
            [PieceType::Knight] | [PieceType::Bishop] => true,
            _ => false,
        }
    }
}

impl Default for Chess {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Chess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.squares[rank][file] {
                    Some(piece) => write!(f, " {}", piece)?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}
