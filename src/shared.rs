//! A lockable island game for callers that share one game between threads.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::ActionError;
use crate::island::{Action, GameEvent, IslandGame, Outcome, TurnPhase};
use crate::sync::Mutex;

/// Owns an [`IslandGame`] and serializes every call on it.
///
/// The game itself takes `&mut self` for [`IslandGame::apply`]. Wrapping it
/// here lets several players hold a shared reference and still apply their
/// actions one at a time.
pub struct SharedIsland {
    game: Mutex<IslandGame>,
}

impl SharedIsland {
    /// Wraps a game.
    #[must_use]
    pub const fn new(game: IslandGame) -> Self {
        Self {
            game: Mutex::new(game),
        }
    }

    /// Returns the legal actions for `player`.
    #[must_use]
    pub fn legal_actions(&self, player: usize) -> Vec<Action> {
        self.game.lock().legal_actions(player)
    }

    /// Applies an action under the lock.
    ///
    /// # Errors
    ///
    /// Same as [`IslandGame::apply`].
    pub fn apply(&self, action: Action) -> Result<Vec<GameEvent>, ActionError> {
        self.game.lock().apply(action)
    }

    /// Returns the seat whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> usize {
        self.game.lock().active_player()
    }

    /// Returns the current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.game.lock().phase()
    }

    /// Returns how the game stands.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.game.lock().outcome()
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game.lock().is_game_over()
    }

    /// Runs `f` with the game locked.
    pub fn with_game<R>(&self, f: impl FnOnce(&IslandGame) -> R) -> R {
        f(&self.game.lock())
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> IslandGame {
        self.game.lock().clone()
    }

    /// Unwraps the game.
    #[must_use]
    pub fn into_inner(self) -> IslandGame {
        self.game.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::island::Role;
    use crate::options::IslandOptions;

    #[test]
    fn applies_through_the_lock() {
        let game = IslandGame::with_roles(
            IslandOptions::default(),
            &[Role::Pilot, Role::Explorer],
            3,
        )
        .unwrap();
        let shared = SharedIsland::new(game);
        let player = shared.active_player();

        let action = Action::EndTurn { player };
        assert!(shared.legal_actions(player).contains(&action));
        let events = shared.apply(action).unwrap();

        assert!(!events.is_empty());
        assert!(shared.is_game_over() || shared.active_player() != player);
        assert_eq!(shared.with_game(IslandGame::active_player), shared.active_player());
        assert_eq!(shared.snapshot().turn, shared.into_inner().turn);
    }
}
