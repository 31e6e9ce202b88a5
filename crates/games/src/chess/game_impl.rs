//! Implementation of the versus game contract for chess.

use versus_core::{GameState, OrderHint, Player};

use super::piece::{back_rank, PieceType};
use super::position::{CastlingRights, Chess, Squares};
use super::square::{ChessMove, Square};

/// Plies during which development of minor pieces is rewarded.
const OPENING_PLIES: u16 = 20;

/// Bonus per own piece on d4, e4, d5 or e5.
const CENTER_BONUS: f64 = 0.5;

/// Bonus per knight or bishop home square vacated during the opening.
const DEVELOPMENT_BONUS: f64 = 0.3;

/// Fifty full moves without a capture or pawn move.
const FIFTY_MOVE_PLIES: u16 = 100;

/// Chess board snapshot.
///
/// Besides piece placement this carries every field that move generation,
/// terminal detection or evaluation reads, so two positions with equal
/// snapshots always search identically.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ChessBoard {
    pub squares: Squares,
    pub side_to_move: Player,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u16,
    pub opening: bool,
}

impl Chess {
    fn is_opening(&self) -> bool {
        self.plies < OPENING_PLIES
    }

    fn material(&self, color: Player) -> f64 {
        self.pieces()
            .filter(|(_, p)| p.color == color)
            .map(|(_, p)| p.kind.value() as f64)
            .sum()
    }

    fn positional(&self, color: Player) -> f64 {
        let center = [(3, 3), (4, 3), (3, 4), (4, 4)]
            .into_iter()
            .filter(|&(file, rank)| {
                self.piece_at(Square { file, rank })
                    .is_some_and(|p| p.color == color)
            })
            .count() as f64
            * CENTER_BONUS;

        let development = if self.is_opening() {
            let rank = back_rank(color);
            [1, 2, 5, 6]
                .into_iter()
                .filter(|&file| self.piece_at(Square { file, rank }).is_none())
                .count() as f64
                * DEVELOPMENT_BONUS
        } else {
            0.0
        };

        center + development
    }
}

impl GameState for Chess {
    type Move = ChessMove;
    type Board = ChessBoard;

    fn board(&self) -> ChessBoard {
        ChessBoard {
            squares: self.squares,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            opening: self.is_opening(),
        }
    }

    fn valid_moves(&self) -> Vec<ChessMove> {
        self.legal_moves()
    }

    /// Plays `mv` for `player`.
    ///
    /// Only checks that `player` owns the moving piece and does not capture
    /// its own; full legality is the job of [`GameState::valid_moves`].
    fn make_move(&mut self, mv: ChessMove, player: Player) -> bool {
        let owns_piece = self.piece_at(mv.from).is_some_and(|p| p.color == player);
        let own_target = self.piece_at(mv.to).is_some_and(|p| p.color == player);
        if !owns_piece || own_target || mv.from == mv.to {
            return false;
        }
        self.apply(mv, player);
        true
    }

    fn is_terminal(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_PLIES
            || self.insufficient_material()
            || self.legal_moves().is_empty()
    }

    fn evaluate(&self, player: Player) -> f64 {
        let opponent = player.opponent();
        if self.is_terminal() {
            return if self.is_checkmated(opponent) {
                f64::INFINITY
            } else if self.is_checkmated(player) {
                f64::NEG_INFINITY
            } else {
                0.0
            };
        }

        let mine = self.material(player) + self.positional(player);
        let theirs = self.material(opponent) + self.positional(opponent);
        mine - theirs
    }

    fn check_win(&self, player: Player) -> bool {
        self.is_checkmated(player.opponent())
    }

    fn order_hint(&self, mv: ChessMove) -> OrderHint {
        let Some(aggressor) = self.piece_at(mv.from) else {
            return OrderHint::Quiet;
        };
        match self.piece_at(mv.to) {
            Some(victim) if victim.color != aggressor.color => OrderHint::Capture {
                victim: victim.kind.value(),
                aggressor: aggressor.kind.value(),
            },
            None if aggressor.kind == PieceType::Pawn && self.en_passant == Some(mv.to) && mv.from.file != mv.to.file => {
                OrderHint::Capture {
                    victim: PieceType::Pawn.value(),
                    aggressor: PieceType::Pawn.value(),
                }
            }
            _ => OrderHint::Quiet,
        }
    }
}
