//! Arena configuration loading.
//!
//! Engine parameters come from an optional TOML file with one section per
//! engine, then individual CLI flags override them:
//!
//! ```toml
//! [minimax]
//! max_depth = 3
//!
//! [alphabeta]
//! max_depth = 5
//! random_tie_break = false
//!
//! [mcts]
//! thinking_time_ms = 500
//! exploration = 1.41
//!
//! [arena]
//! max_plies = 300
//! ```
//!
//! Missing sections and keys fall back to the engine defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use versus_alphabeta::DepthConfig;
use versus_mcts::MctsConfig;

/// Settings for the match loop itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    /// Plies after which an undecided game is scored as a draw.
    pub max_plies: usize,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self { max_plies: 500 }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub minimax: DepthConfig,
    pub alphabeta: DepthConfig,
    pub mcts: MctsConfig,
    pub arena: ArenaSettings,
}

/// CLI values that take precedence over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub depth: Option<usize>,
    pub thinking_ms: Option<u64>,
    pub rollouts: Option<u64>,
    pub max_plies: Option<usize>,
}

impl ArenaConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse arena config")
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        info!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load from `path` if given, else use built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                debug!("No config file given, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply CLI overrides. `depth` applies to both depth-limited engines.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(depth) = overrides.depth {
            self.minimax.max_depth = depth;
            self.alphabeta.max_depth = depth;
        }
        if let Some(ms) = overrides.thinking_ms {
            self.mcts.thinking_time_ms = ms;
        }
        if let Some(rollouts) = overrides.rollouts {
            self.mcts.max_rollouts = Some(rollouts);
        }
        if let Some(max_plies) = overrides.max_plies {
            self.arena.max_plies = max_plies;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.minimax.validate().context("[minimax]")?;
        self.alphabeta.validate().context("[alphabeta]")?;
        self.mcts.validate().context("[mcts]")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ArenaConfig::from_toml_str("").unwrap();
        assert_eq!(config, ArenaConfig::default());
        assert_eq!(config.arena.max_plies, 500);
        assert_eq!(config.alphabeta.max_depth, 4);
        assert_eq!(config.mcts.thinking_time_ms, 200);
    }

    #[test]
    fn test_partial_sections() {
        let config = ArenaConfig::from_toml_str(
            r#"
            [alphabeta]
            max_depth = 6
            random_tie_break = false

            [mcts]
            exploration = 0.5
            max_rollouts = 1000
            "#,
        )
        .unwrap();

        assert_eq!(config.alphabeta.max_depth, 6);
        assert!(!config.alphabeta.random_tie_break);
        assert_eq!(config.alphabeta.tie_break_odds, 6);
        assert_eq!(config.minimax, DepthConfig::default());
        assert_eq!(config.mcts.exploration, 0.5);
        assert_eq!(config.mcts.max_rollouts, Some(1000));
        assert_eq!(config.mcts.thinking_time_ms, 200);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(ArenaConfig::from_toml_str("[alphabeta\nmax_depth = 3").is_err());
        assert!(ArenaConfig::from_toml_str("[alphabeta]\nmax_depth = \"deep\"").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ArenaConfig::load(Some(Path::new("/nonexistent/versus.toml")));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to read config file"));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(ArenaConfig::load(None).unwrap(), ArenaConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut config = ArenaConfig::from_toml_str("[minimax]\nmax_depth = 2\n").unwrap();
        config.apply_overrides(&Overrides {
            depth: Some(5),
            thinking_ms: Some(50),
            rollouts: None,
            max_plies: Some(100),
        });

        assert_eq!(config.minimax.max_depth, 5);
        assert_eq!(config.alphabeta.max_depth, 5);
        assert_eq!(config.mcts.thinking_time_ms, 50);
        assert_eq!(config.mcts.max_rollouts, None);
        assert_eq!(config.arena.max_plies, 100);
    }

    #[test]
    fn test_validate_names_bad_section() {
        let config = ArenaConfig::from_toml_str("[mcts]\nexploration = -2.0\n").unwrap();
        let message = format!("{:#}", config.validate().unwrap_err());
        assert!(message.contains("[mcts]"));
        assert!(ArenaConfig::default().validate().is_ok());
    }
}
