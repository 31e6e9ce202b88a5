//! End-to-end move selection on concrete positions.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use versus_alphabeta::{AlphaBeta, DepthConfig, Minimax};
use versus_core::{Engine, GameState, Player};
use versus_games::{Chess, ChessMove, Connect4};

fn alphabeta<G: GameState>(config: DepthConfig, seed: u64) -> AlphaBeta<G, ChaCha8Rng> {
    AlphaBeta::new(config, ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn test_empty_connect4_returns_a_column() {
    let state = Connect4::new();
    assert_eq!(state.valid_moves(), vec![3, 2, 4, 1, 5, 0, 6]);

    let mut ab = alphabeta::<Connect4>(DepthConfig::with_depth(1), 1);
    let mv = ab.get_move(&state, Player::One).expect("empty board has moves");
    assert!(mv < 7);

    let mut minimax = Minimax::new(DepthConfig::with_depth(1));
    let mv = Engine::<Connect4>::get_move(&mut minimax, &state, Player::One);
    assert!(mv.is_some_and(|c| c < 7));
}

#[test]
fn test_completes_three_in_a_row() {
    let state = Connect4::from_rows(&[
        ".......",
        ".......",
        ".......",
        ".......",
        "OOO....",
        "XXX....",
    ])
    .unwrap();

    for seed in 0..4 {
        let mut ab = alphabeta(DepthConfig::with_depth(2), seed);
        let outcome = ab.search(&state, Player::One);
        assert_eq!(outcome.best_move, Some(3));
        assert_eq!(outcome.score, f64::INFINITY);
    }

    let mut minimax = Minimax::new(DepthConfig::with_depth(2));
    assert_eq!(minimax.search(&state, Player::One).best_move, Some(3));
}

#[test]
fn test_blocks_opponent_three() {
    // O to move must stop the bottom row.
    let state = Connect4::from_rows(&[
        ".......",
        ".......",
        ".......",
        ".......",
        ".......",
        "XXX..O.",
    ])
    .unwrap();

    let mut ab = alphabeta::<Connect4>(DepthConfig::deterministic(2), 0);
    assert_eq!(ab.get_move(&state, Player::Two), Some(3));
}

#[test]
fn test_chess_opening_move_is_legal() {
    let state = Chess::new();
    let mut minimax = Minimax::new(DepthConfig::with_depth(1));
    let mv = minimax
        .search(&state, Player::One)
        .best_move
        .expect("starting position has moves");
    assert!(state.valid_moves().contains(&mv));
}

#[test]
fn test_chess_finds_mate_in_one() {
    let state = Chess::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")
        .unwrap();
    let mate = ChessMove::parse("h5f7").unwrap();

    let mut ab = alphabeta(DepthConfig::with_depth(1), 5);
    let outcome = ab.search(&state, Player::One);
    assert_eq!(outcome.best_move, Some(mate));
    assert_eq!(outcome.score, f64::INFINITY);

    let mut minimax = Minimax::new(DepthConfig::with_depth(1));
    assert_eq!(minimax.search(&state, Player::One).best_move, Some(mate));
}

#[test]
fn test_checkmated_side_has_no_move() {
    let state = Chess::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
        .unwrap();
    let mut ab = alphabeta::<Chess>(DepthConfig::with_depth(2), 0);
    assert_eq!(ab.get_move(&state, Player::Two), None);

    let mut minimax = Minimax::new(DepthConfig::with_depth(2));
    assert_eq!(minimax.search(&state, Player::Two).best_move, None);
}

#[test]
fn test_same_seed_same_moves() {
    let state = Connect4::new();
    let mut first = alphabeta::<Connect4>(DepthConfig::with_depth(3), 11);
    let mut second = alphabeta::<Connect4>(DepthConfig::with_depth(3), 11);

    let mut a = state.clone();
    let mut b = state;
    let mut player = Player::One;
    for _ in 0..6 {
        let mv_a = first.get_move(&a, player).unwrap();
        let mv_b = second.get_move(&b, player).unwrap();
        assert_eq!(mv_a, mv_b);
        a.make_move(mv_a, player);
        b.make_move(mv_b, player);
        player = player.opponent();
    }
}

#[test]
fn test_deterministic_config_ignores_seed() {
    let state = Connect4::new();
    let mut first = alphabeta(DepthConfig::deterministic(3), 1);
    let mut second = alphabeta(DepthConfig::deterministic(3), 2);
    assert_eq!(first.search(&state, Player::One), second.search(&state, Player::One));
}
