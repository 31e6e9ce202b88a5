use thiserror::Error;

/// Errors raised while building positions or configuring engines.
///
/// Search itself never fails: a position without legal moves is reported
/// as `None` from [`crate::Engine::get_move`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VersusError {
    #[error("Invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("Invalid board layout: {0}")]
    InvalidBoard(String),

    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience Result type for versus operations
pub type Result<T> = std::result::Result<T, VersusError>;
