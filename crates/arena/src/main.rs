//! Engine-vs-engine arena for the versus search engines.
//!
//! Plays matches between Minimax, Alpha-Beta and MCTS on Connect Four,
//! chess or tic-tac-toe and reports wins and draws.

mod config;
mod engines;
mod runner;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use versus_games::{Chess, Connect4, TicTacToe};

use crate::config::{ArenaConfig, Overrides};
use crate::engines::{EngineKind, GameKind};
use crate::runner::{run_match, MatchOptions, MatchSummary};

/// Pit adversarial search engines against each other.
#[derive(Parser)]
#[command(name = "versus")]
#[command(about = "Play Minimax, Alpha-Beta and MCTS against each other")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match between two engines.
    Play(PlayArgs),
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Game to play.
    #[arg(long, value_enum, default_value = "connect4")]
    game: GameKind,

    /// Engine moving first.
    #[arg(long, value_enum, default_value = "alphabeta")]
    first: EngineKind,

    /// Engine moving second.
    #[arg(long, value_enum, default_value = "mcts")]
    second: EngineKind,

    /// Number of games to play.
    #[arg(short, long, default_value = "10")]
    games: usize,

    /// Search depth for Minimax and Alpha-Beta (overrides the config file).
    #[arg(short, long)]
    depth: Option<usize>,

    /// MCTS thinking time per move in milliseconds (overrides the config file).
    #[arg(long)]
    thinking_ms: Option<u64>,

    /// Cap on MCTS rollouts per move (overrides the config file).
    #[arg(long)]
    rollouts: Option<u64>,

    /// Plies after which a game is scored as a draw (overrides the config file).
    #[arg(long)]
    max_plies: Option<usize>,

    /// Random seed for reproducibility.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// TOML file with [minimax], [alphabeta], [mcts] and [arena] sections.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Print the board after every move (games run sequentially).
    #[arg(short, long)]
    verbose: bool,
}

impl PlayArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            depth: self.depth,
            thinking_ms: self.thinking_ms,
            rollouts: self.rollouts,
            max_plies: self.max_plies,
        }
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Run the play command.
fn cmd_play(args: &PlayArgs) -> Result<MatchSummary> {
    let mut config = ArenaConfig::load(args.config.as_deref())?;
    config.apply_overrides(&args.overrides());
    config.validate()?;

    let options = MatchOptions {
        games: args.games,
        seed: args.seed,
        verbose: args.verbose,
    };

    let summary = match args.game {
        GameKind::Connect4 => run_match(Connect4::new, args.game, args.first, args.second, &config, options),
        GameKind::Chess => run_match(Chess::new, args.game, args.first, args.second, &config, options),
        GameKind::Tictactoe => run_match(TicTacToe::new, args.game, args.first, args.second, &config, options),
    };
    Ok(summary)
}

fn main() -> Result<()> {
    init_tracing("info");
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let summary = cmd_play(&args)?;
            info!(
                first_wins = summary.first_wins,
                second_wins = summary.second_wins,
                draws = summary.draws,
                "match finished"
            );
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary);
            }
            Ok(())
        }
    }
}
