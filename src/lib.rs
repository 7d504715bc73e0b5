//! Turn-based tabletop rule engines with optional `no_std` support.
//!
//! The crate provides two games. [`IslandGame`] is a cooperative game of
//! adventurers collecting treasures from a sinking island: it enumerates the
//! legal actions for the player to move and applies the chosen one, running
//! the end-of-turn draw and flood itself. [`VideoPoker`] is a single-player
//! jacks-or-better machine.
//!
//! # Example
//!
//! ```
//! use islandrs::{IslandGame, IslandOptions};
//!
//! let mut game = IslandGame::new(IslandOptions::default(), 42).unwrap();
//! while !game.is_game_over() {
//!     let player = game.active_player();
//!     let action = game.legal_actions(player).swap_remove(0);
//!     let _events = game.apply(action).unwrap();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod island;
pub mod options;
pub mod pile;
pub mod poker;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, DrawError, ParseCardError, PileError, SetupError, WagerError};
pub use island::{
    Action, Board, Coord, FloodCard, GameEvent, IslandGame, LossReason, Outcome, Reach, Role,
    Tile, Treasure, TreasureCard, TurnPhase, WaterMeter,
};
pub use options::{IslandOptions, PokerOptions, PrizeTable};
pub use pile::Pile;
pub use poker::{PokerHand, VideoPoker};
pub use shared::SharedIsland;
