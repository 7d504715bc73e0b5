//! Error types for game operations.

use thiserror::Error;

use crate::island::Role;

/// Errors that can occur while setting up an island game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Player count outside the supported range.
    #[error("player count must be between 2 and 4, got {0}")]
    InvalidPlayerCount(usize),
    /// Starting water level is not one of the selectable levels.
    #[error("starting water level {0} is not selectable")]
    InvalidWaterLevel(usize),
    /// The layout has more occupied spaces than the tile pool has tiles.
    #[error("layout needs {needed} tiles but the pool has {available}")]
    NotEnoughTiles {
        /// Occupied spaces in the layout.
        needed: usize,
        /// Tiles in the pool.
        available: usize,
    },
    /// The same role was dealt to two seats.
    #[error("role {0:?} dealt twice")]
    DuplicateRole(Role),
    /// A tile name could not be found on the board.
    #[error("no tile named {0}")]
    UnknownTile(&'static str),
}

/// Errors that can occur when applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// The action is not in the current legal set.
    #[error("action is not legal in the current state")]
    NotLegal,
    /// A referenced card could not be found.
    #[error(transparent)]
    Pile(#[from] PileError),
}

/// Errors that can occur when removing items from a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The requested item is not in the pile.
    #[error("item not found in pile")]
    NotFound,
    /// The requested index is past the end of the pile.
    #[error("index {index} out of range for pile of {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Pile length.
        len: usize,
    },
}

/// Errors that can occur when wagering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Wager amount is zero.
    #[error("wager amount is zero")]
    ZeroWager,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid game state for wagering.
    #[error("invalid game state for wagering")]
    InvalidState,
}

/// Errors that can occur when dealing or drawing poker cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid game state for this operation.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// An explicit deal was not a full hand.
    #[error("a hand is five cards, got {0}")]
    HandSize(usize),
    /// The card is not in the deck.
    #[error("card is not in the deck")]
    CardNotInDeck,
    /// A held index does not point into the hand.
    #[error("held index {0} is not in the hand")]
    BadHoldIndex(usize),
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Unknown rank character.
    #[error("unknown rank {0:?}")]
    Rank(char),
    /// Unknown suit character.
    #[error("unknown suit {0:?}")]
    Suit(char),
    /// Input was not exactly two characters.
    #[error("card notation must be two characters")]
    Length,
}
