//! MCTS configuration parameters.
//!
//! These parameters control the time budget, the UCB1 exploration term and
//! the random playouts.

use serde::{Deserialize, Serialize};
use versus_core::{Result, VersusError};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Wall-clock budget per move, in milliseconds.
    pub thinking_time_ms: u64,

    /// UCB1 exploration constant C in `Q/N + C * sqrt(ln(N_parent) / N)`.
    /// 0 = pure exploitation.
    pub exploration: f64,

    /// Plies a random playout may run before it is scored by the static
    /// evaluation instead of the actual result.
    pub max_playout_depth: usize,

    /// Optional cap on simulations per move. Reaching it ends the search
    /// even if time remains, which makes searches reproducible.
    pub max_rollouts: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            thinking_time_ms: 200,
            exploration: 1.41,
            max_playout_depth: 50,
            max_rollouts: None,
        }
    }
}

impl MctsConfig {
    /// Create a new config with the specified time budget.
    pub fn with_thinking_time(thinking_time_ms: u64) -> Self {
        Self {
            thinking_time_ms,
            ..Default::default()
        }
    }

    /// Create a config that runs exactly `rollouts` simulations.
    ///
    /// The time budget is lifted so the outcome depends only on the RNG.
    pub fn with_rollouts(rollouts: u64) -> Self {
        Self {
            thinking_time_ms: u64::MAX,
            max_rollouts: Some(rollouts),
            ..Default::default()
        }
    }

    /// Check the parameters are usable.
    ///
    /// # Errors
    /// Returns `VersusError::InvalidConfig` if the exploration constant is
    /// negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(VersusError::InvalidConfig(format!(
                "exploration must be finite and non-negative, got {}",
                self.exploration
            )));
        }
        Ok(())
    }
}
