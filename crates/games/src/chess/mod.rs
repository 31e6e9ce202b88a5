//! Chess rules on an 8x8 mailbox board.
//!
//! Moves are coordinate pairs. The rules cover castling, en passant,
//! promotion (always to a queen), checkmate, stalemate, the fifty-move rule
//! and bare-king / single-minor-piece insufficient material.

mod game_impl;
mod movegen;
mod piece;
mod position;
mod square;

pub use game_impl::ChessBoard;
pub use piece::{Piece, PieceType, BLACK, WHITE};
pub use position::{CastlingRights, Chess, Squares};
pub use square::{ChessMove, Square};
