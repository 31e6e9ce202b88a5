//! Depth-limited search configuration.
//!
//! These parameters control Minimax and Alpha-Beta. Both engines search
//! `max_depth` plies below each root move.

use serde::{Deserialize, Serialize};
use versus_core::{Result, VersusError};

/// Deepest search accepted by [`DepthConfig::validate`].
pub const MAX_SEARCH_DEPTH: usize = 32;

/// Depth-limited search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthConfig {
    /// Plies searched below each root move. 0 evaluates the root moves
    /// directly.
    pub max_depth: usize,

    /// Whether Alpha-Beta may swap the chosen root move for a later move
    /// with exactly the same score. Minimax always keeps the first.
    pub random_tie_break: bool,

    /// A tied root move replaces the incumbent with probability
    /// `1 / tie_break_odds`.
    pub tie_break_odds: u32,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            random_tie_break: true,
            tie_break_odds: 6,
        }
    }
}

impl DepthConfig {
    /// Create a new config with the specified depth.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Create a config with randomness disabled: ties keep the first move.
    pub fn deterministic(max_depth: usize) -> Self {
        Self {
            max_depth,
            random_tie_break: false,
            ..Default::default()
        }
    }

    /// Check the parameters are usable.
    ///
    /// # Errors
    /// Returns `VersusError::InvalidConfig` if `max_depth` exceeds
    /// [`MAX_SEARCH_DEPTH`] or `tie_break_odds` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_SEARCH_DEPTH {
            return Err(VersusError::InvalidConfig(format!(
                "max_depth {} exceeds {}",
                self.max_depth, MAX_SEARCH_DEPTH
            )));
        }
        if self.tie_break_odds == 0 {
            return Err(VersusError::InvalidConfig(
                "tie_break_odds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
