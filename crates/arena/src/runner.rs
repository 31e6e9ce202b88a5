//! Engine-vs-engine matches.
//!
//! Every game builds its own engines and its own starting state, so games
//! share nothing and run in parallel on the rayon pool.

use std::fmt;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};
use versus_core::{Engine, GameState, Player};

use crate::config::ArenaConfig;
use crate::engines::{EngineKind, GameKind};

/// How one game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for draws, including games stopped at the ply cap.
    pub winner: Option<Player>,
    pub plies: usize,
}

/// Parameters of a match that are not engine settings.
#[derive(Clone, Copy, Debug)]
pub struct MatchOptions {
    pub games: usize,
    pub seed: u64,
    /// Print the board after every move. Forces games to run one at a time.
    pub verbose: bool,
}

/// Aggregate result of a match. The first engine always plays
/// `Player::One`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchSummary {
    pub game: GameKind,
    pub first: EngineKind,
    pub second: EngineKind,
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub average_plies: f64,
    pub elapsed_ms: u64,
}

impl MatchSummary {
    fn tally(game: GameKind, first: EngineKind, second: EngineKind, results: &[GameResult]) -> Self {
        let count = |winner: Option<Player>| results.iter().filter(|r| r.winner == winner).count();
        let total_plies: usize = results.iter().map(|r| r.plies).sum();
        Self {
            game,
            first,
            second,
            games: results.len(),
            first_wins: count(Some(Player::One)),
            second_wins: count(Some(Player::Two)),
            draws: count(None),
            average_plies: if results.is_empty() {
                0.0
            } else {
                total_plies as f64 / results.len() as f64
            },
            elapsed_ms: 0,
        }
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} games of {}", self.games, self.game)?;
        writeln!(f, "{:<10} (first):  {} wins", self.first, self.first_wins)?;
        writeln!(f, "{:<10} (second): {} wins", self.second, self.second_wins)?;
        writeln!(f, "draws:                {}", self.draws)?;
        write!(
            f,
            "average length: {:.1} plies, {:.2}s total",
            self.average_plies,
            self.elapsed_ms as f64 / 1000.0
        )
    }
}

/// Play one game from `state` to the end, or to `max_plies`.
///
/// `engines[0]` plays `Player::One`. The game also ends early if an
/// engine returns no move or a move the game rejects.
pub fn play_game<G: GameState + fmt::Display>(
    mut state: G,
    engines: &mut [Box<dyn Engine<G>>; 2],
    max_plies: usize,
    verbose: bool,
) -> GameResult {
    let mut player = Player::One;
    let mut plies = 0;

    while !state.is_terminal() && plies < max_plies {
        let engine = &mut engines[player.index()];
        let Some(mv) = engine.get_move(&state, player) else {
            debug!(%player, engine = engine.name(), "no move returned");
            break;
        };
        if !state.make_move(mv, player) {
            warn!(%player, engine = engine.name(), ?mv, "engine chose a rejected move");
            break;
        }
        plies += 1;
        if verbose {
            println!("{} ({}) plays {:?}\n{}", player, engine.name(), mv, state);
        }
        player = state.opponent(player);
    }

    let winner = Player::BOTH.into_iter().find(|&p| state.check_win(p));
    GameResult { winner, plies }
}

/// Play `options.games` games of `first` against `second`.
pub fn run_match<G: GameState + fmt::Display + 'static>(
    new_game: fn() -> G,
    kind: GameKind,
    first: EngineKind,
    second: EngineKind,
    config: &ArenaConfig,
    options: MatchOptions,
) -> MatchSummary {
    let start = Instant::now();
    info!(
        game = %kind,
        %first,
        %second,
        games = options.games,
        seed = options.seed,
        "starting match"
    );

    let play = |i: usize| {
        let game_seed = options.seed.wrapping_add(i as u64 * 1000);
        let mut engines = [
            first.build::<G>(config, game_seed),
            second.build::<G>(config, game_seed.wrapping_add(1)),
        ];
        let result = play_game(new_game(), &mut engines, config.arena.max_plies, options.verbose);
        let outcome = match result.winner {
            Some(Player::One) => first.to_string(),
            Some(Player::Two) => second.to_string(),
            None => "draw".to_string(),
        };
        info!(game = i + 1, %outcome, plies = result.plies, "game finished");
        result
    };

    let results: Vec<GameResult> = if options.verbose {
        (0..options.games).map(play).collect()
    } else {
        (0..options.games).into_par_iter().map(play).collect()
    };

    let mut summary = MatchSummary::tally(kind, first, second, &results);
    summary.elapsed_ms = start.elapsed().as_millis() as u64;
    summary
}
