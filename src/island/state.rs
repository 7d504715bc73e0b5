//! Turn phase and outcome types.

use super::tile::Treasure;

/// Where the current turn stands, derived from the turn counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// The active player may act.
    Actions,
    /// A hand is over the limit and must be discarded down before the turn
    /// can pass.
    ForcedDiscard {
        /// Seat that must discard.
        player: usize,
    },
    /// The game has ended.
    GameOver,
}

/// Why the island claimed its adventurers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    /// The water meter reached Death.
    WaterLevel,
    /// Fools' Landing sank.
    ExitSunk,
    /// Both tiles of an uncollected treasure sank.
    TreasureLost(Treasure),
    /// An adventurer had nowhere to swim.
    Drowned {
        /// Seat of the drowned adventurer.
        player: usize,
    },
}

/// How the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Still playing.
    InProgress,
    /// Everyone flew off with all four treasures.
    Won,
    /// The island won.
    Lost(LossReason),
}
