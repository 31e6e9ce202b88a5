//! Versus Games - Concrete games for the versus search engines
//!
//! Each game implements [`versus_core::GameState`] so any engine can play it.
//!
//! - [`Connect4`] - 6x7 Connect Four, moves are column indices
//! - [`Chess`] - standard chess, moves are pairs of squares
//! - [`TicTacToe`] - 3x3, small enough for exhaustive search

pub mod chess;
pub mod connect4;
pub mod tictactoe;

pub use chess::{Chess, ChessMove, Square};
pub use connect4::Connect4;
pub use tictactoe::{Cell, TicTacToe};
