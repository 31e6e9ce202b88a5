//! Alpha-Beta must agree with Minimax.
//!
//! Pruning, caching and move ordering may only change how many positions
//! are visited, never the value found for the root. With random
//! tie-breaking off, both engines also pick the same move.

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use versus_alphabeta::{AlphaBeta, DepthConfig, Minimax};
use versus_core::{GameState, Player};
use versus_games::{Cell, Chess, Connect4, TicTacToe};

/// Play up to `plies` random moves from `state`, alternating from
/// `Player::One`. Returns the position and the player to move.
fn random_position<G: GameState>(mut state: G, plies: usize, seed: u64) -> (G, Player) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut player = Player::One;
    for _ in 0..plies {
        let moves = state.valid_moves();
        if state.is_terminal() || moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        assert!(state.make_move(mv, player));
        player = player.opponent();
    }
    (state, player)
}

fn assert_same_result<G: GameState>(state: &G, player: Player, depth: usize) {
    let mut minimax = Minimax::new(DepthConfig::with_depth(depth));
    let mut ab = AlphaBeta::new(DepthConfig::deterministic(depth), ChaCha8Rng::seed_from_u64(0));

    let expected = minimax.search(state, player);
    let actual = ab.search(state, player);
    assert_eq!(actual.score, expected.score);
    assert_eq!(actual.best_move, expected.best_move);
    assert!(actual.nodes <= expected.nodes);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_tictactoe_matches_minimax(
        plies in 0usize..8,
        seed in any::<u64>(),
        depth in 0usize..5,
    ) {
        let (state, player) = random_position(TicTacToe::new(), plies, seed);

        let mut minimax = Minimax::new(DepthConfig::with_depth(depth));
        let mut ab = AlphaBeta::new(DepthConfig::deterministic(depth), ChaCha8Rng::seed_from_u64(seed));
        let expected = minimax.search(&state, player);
        let actual = ab.search(&state, player);

        prop_assert_eq!(actual.score, expected.score);
        prop_assert_eq!(actual.best_move, expected.best_move);
        prop_assert!(actual.nodes <= expected.nodes);
    }

    #[test]
    fn prop_tictactoe_random_tie_break_keeps_value(
        plies in 0usize..8,
        seed in any::<u64>(),
        depth in 0usize..5,
    ) {
        let (state, player) = random_position(TicTacToe::new(), plies, seed);

        let mut minimax = Minimax::new(DepthConfig::with_depth(depth));
        let mut ab = AlphaBeta::new(DepthConfig::with_depth(depth), ChaCha8Rng::seed_from_u64(seed));
        let expected = minimax.search(&state, player);
        let actual = ab.search(&state, player);

        prop_assert_eq!(actual.score, expected.score);
        prop_assert_eq!(actual.best_move.is_some(), expected.best_move.is_some());
        if let Some(mv) = actual.best_move {
            prop_assert!(state.valid_moves().contains(&mv));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_connect4_matches_minimax(
        plies in 0usize..16,
        seed in any::<u64>(),
        depth in 0usize..4,
    ) {
        let (state, player) = random_position(Connect4::new(), plies, seed);

        let mut minimax = Minimax::new(DepthConfig::with_depth(depth));
        let mut ab = AlphaBeta::new(DepthConfig::deterministic(depth), ChaCha8Rng::seed_from_u64(seed));
        let expected = minimax.search(&state, player);
        let actual = ab.search(&state, player);

        prop_assert_eq!(actual.score, expected.score);
        prop_assert_eq!(actual.best_move, expected.best_move);
    }
}

#[test]
fn test_full_depth_tictactoe_from_every_opening() {
    for cell in 0..9 {
        let mut state = TicTacToe::new();
        assert!(state.make_move(Cell(cell), Player::One));
        assert_same_result(&state, Player::Two, 7);
    }
}

#[test]
fn test_both_perspectives_connect4() {
    let (state, _) = random_position(Connect4::new(), 6, 7);
    for player in Player::BOTH {
        assert_same_result(&state, player, 3);
    }
}

#[test]
fn test_chess_opening_scores_agree() {
    let state = Chess::new();
    let mut minimax = Minimax::new(DepthConfig::with_depth(1));
    let mut ab = AlphaBeta::new(DepthConfig::with_depth(1), ChaCha8Rng::seed_from_u64(3));

    let expected = minimax.search(&state, Player::One);
    let actual = ab.search(&state, Player::One);
    assert_eq!(actual.score, expected.score);
    assert!(state.valid_moves().contains(&actual.best_move.unwrap()));
}

#[test]
fn test_chess_middlegame_scores_agree() {
    let state = Chess::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
        .unwrap();
    let mut minimax = Minimax::new(DepthConfig::with_depth(1));
    let mut ab = AlphaBeta::new(DepthConfig::with_depth(1), ChaCha8Rng::seed_from_u64(9));

    let expected = minimax.search(&state, Player::One);
    let actual = ab.search(&state, Player::One);
    assert_eq!(actual.score, expected.score);
}
