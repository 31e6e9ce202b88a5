//! Versus Core - Game contract and engine interface
//!
//! This crate defines the capability set a two-player, zero-sum,
//! perfect-information game must expose to be searched, and the interface
//! every search engine implements.
//!
//! # Types
//!
//! - [`GameState`] - Trait for searchable game positions
//! - [`Engine`] - Trait for move-choosing algorithms
//! - [`Player`] - One of the two sides
//! - [`OrderHint`] - Move shape used by ordering heuristics
//! - [`SearchOutcome`] - Chosen move plus root score of a depth-limited search

mod engine;
mod error;
mod game;
mod types;

pub use engine::Engine;
pub use error::{Result, VersusError};
pub use game::GameState;
pub use types::{OrderHint, Player, SearchOutcome};
