use crate::game::GameState;
use crate::types::Player;

/// A move-choosing search algorithm.
///
/// One engine instance serves one decision at a time. Any per-search tables
/// it owns are rebuilt at the start of every [`Engine::get_move`] call, so
/// independent games can run concurrently as long as each uses its own
/// engine and its own states.
pub trait Engine<G: GameState> {
    /// Short algorithm name used in logs and match reports.
    fn name(&self) -> &'static str;

    /// Chooses a move for `player` in `state`.
    ///
    /// Returns `None` when there is nothing to play: the game is already
    /// decided and the caller must not call `make_move`.
    fn get_move(&mut self, state: &G, player: Player) -> Option<G::Move>;
}

impl<G: GameState, E: Engine<G> + ?Sized> Engine<G> for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get_move(&mut self, state: &G, player: Player) -> Option<G::Move> {
        (**self).get_move(state, player)
    }
}
