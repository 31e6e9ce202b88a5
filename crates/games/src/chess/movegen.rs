//! Legal move generation and attack detection.
//!
//! Moves are generated pseudo-legally per piece, then filtered by playing
//! each one on a copy and rejecting those that leave the mover's king
//! attacked.

use versus_core::Player;

use super::piece::{back_rank, pawn_direction, pawn_start_rank, Piece, PieceType};
use super::position::Chess;
use super::square::{ChessMove, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Chess {
    /// Generate all legal moves for the side to move
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        self.legal_moves_for(self.side_to_move)
    }

    /// Generate all legal moves for `color`, whoever is on move.
    pub fn legal_moves_for(&self, color: Player) -> Vec<ChessMove> {
        self.pseudo_legal_moves(color)
            .into_iter()
            .filter(|&mv| {
                let mut next = self.clone();
                next.apply(mv, color);
                !next.in_check(color)
            })
            .collect()
    }

    /// Check if `color`'s king is attacked.
    pub fn in_check(&self, color: Player) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Check if `color` is in check with no legal move.
    pub fn is_checkmated(&self, color: Player) -> bool {
        self.in_check(color) && self.legal_moves_for(color).is_empty()
    }

    /// Check if a square is attacked by the given color
    pub fn is_square_attacked(&self, sq: Square, by: Player) -> bool {
        let holds = |target: Option<Square>, kinds: &[PieceType]| {
            target
                .and_then(|t| self.piece_at(t))
                .is_some_and(|p| p.color == by && kinds.contains(&p.kind))
        };

        // A pawn of `by` attacks diagonally forward, so look one rank back.
        let dir = pawn_direction(by);
        if holds(sq.offset(-1, -dir), &[PieceType::Pawn]) || holds(sq.offset(1, -dir), &[PieceType::Pawn]) {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(sq.offset(df, dr), &[PieceType::Knight]))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(sq.offset(df, dr), &[PieceType::King]))
        {
            return true;
        }

        let slider_hits = |directions: &[(i8, i8)], kinds: &[PieceType]| {
            directions.iter().any(|&(df, dr)| {
                let mut current = sq.offset(df, dr);
                while let Some(target) = current {
                    if let Some(piece) = self.piece_at(target) {
                        return piece.color == by && kinds.contains(&piece.kind);
                    }
                    current = target.offset(df, dr);
                }
                false
            })
        };

        slider_hits(&DIAGONALS, &[PieceType::Bishop, PieceType::Queen])
            || slider_hits(&ORTHOGONALS, &[PieceType::Rook, PieceType::Queen])
    }

    fn pseudo_legal_moves(&self, color: Player) -> Vec<ChessMove> {
        let mut moves = Vec::with_capacity(48);
        for (from, piece) in self.pieces().filter(|(_, p)| p.color == color) {
            match piece.kind {
                PieceType::Pawn => self.pawn_moves(from, color, &mut moves),
                PieceType::Knight => self.step_moves(from, color, &KNIGHT_OFFSETS, &mut moves),
                PieceType::Bishop => self.slide_moves(from, color, &DIAGONALS, &mut moves),
                PieceType::Rook => self.slide_moves(from, color, &ORTHOGONALS, &mut moves),
                PieceType::Queen => {
                    self.slide_moves(from, color, &DIAGONALS, &mut moves);
                    self.slide_moves(from, color, &ORTHOGONALS, &mut moves);
                }
                PieceType::King => {
                    self.step_moves(from, color, &KING_OFFSETS, &mut moves);
                    self.castling_moves(from, color, &mut moves);
                }
            }
        }
        moves
    }

    fn is_enemy(&self, sq: Square, color: Player) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color != color)
    }

    fn pawn_moves(&self, from: Square, color: Player, moves: &mut Vec<ChessMove>) {
        let dir = pawn_direction(color);

        if let Some(one) = from.offset(0, dir) {
            if self.piece_at(one).is_none() {
                moves.push(ChessMove::new(from, one));
                if from.rank == pawn_start_rank(color) {
                    if let Some(two) = one.offset(0, dir) {
                        if self.piece_at(two).is_none() {
                            moves.push(ChessMove::new(from, two));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(to) = from.offset(df, dir) {
                if self.is_enemy(to, color) || self.en_passant == Some(to) {
                    moves.push(ChessMove::new(from, to));
                }
            }
        }
    }

    fn step_moves(&self, from: Square, color: Player, offsets: &[(i8, i8)], moves: &mut Vec<ChessMove>) {
        for &(df, dr) in offsets {
            if let Some(to) = from.offset(df, dr) {
                if self.piece_at(to).map_or(true, |p| p.color != color) {
                    moves.push(ChessMove::new(from, to));
                }
            }
        }
    }

    fn slide_moves(&self, from: Square, color: Player, directions: &[(i8, i8)], moves: &mut Vec<ChessMove>) {
        for &(df, dr) in directions {
            let mut current = from.offset(df, dr);
            while let Some(to) = current {
                match self.piece_at(to) {
                    None => moves.push(ChessMove::new(from, to)),
                    Some(p) => {
                        if p.color != color {
                            moves.push(ChessMove::new(from, to));
                        }
                        break;
                    }
                }
                current = to.offset(df, dr);
            }
        }
    }

    fn castling_moves(&self, from: Square, color: Player, moves: &mut Vec<ChessMove>) {
        let rank = back_rank(color);
        if from != (Square { file: 4, rank }) {
            return;
        }
        let enemy = color.opponent();
        if self.is_square_attacked(from, enemy) {
            return;
        }

        let rook = Some(Piece::new(color, PieceType::Rook));
        let empty = |files: &[u8]| files.iter().all(|&f| self.piece_at(Square { file: f, rank }).is_none());

        if self.castling.can_castle_kingside(color)
            && self.piece_at(Square { file: 7, rank }) == rook
            && empty(&[5, 6])
            && !self.is_square_attacked(Square { file: 5, rank }, enemy)
        {
            moves.push(ChessMove::new(from, Square { file: 6, rank }));
        }

        if self.castling.can_castle_queenside(color)
            && self.piece_at(Square { file: 0, rank }) == rook
            && empty(&[1, 2, 3])
            && !self.is_square_attacked(Square { file: 3, rank }, enemy)
        {
            moves.push(ChessMove::new(from, Square { file: 2, rank }));
        }
    }
}
