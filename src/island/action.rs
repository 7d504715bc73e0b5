//! Actions a player may choose from.

extern crate alloc;

use alloc::vec::Vec;

use super::board::Coord;
use super::tile::Treasure;

/// A legal move offered by [`IslandGame::legal_actions`](super::IslandGame::legal_actions).
///
/// Player fields are seat indices. Tiles are named by their board coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// End the turn early.
    EndTurn {
        /// Seat ending its turn.
        player: usize,
    },
    /// Move an adventurer. The Navigator may move someone else.
    Move {
        /// Seat spending the action.
        player: usize,
        /// Seat of the adventurer being moved.
        adventurer: usize,
        /// Destination tile.
        to: Coord,
    },
    /// Shore up a flooded tile, or two for the Engineer.
    Shore {
        /// Seat spending the action.
        player: usize,
        /// Tile to shore up.
        tile: Coord,
        /// Second tile, Engineer only.
        second: Option<Coord>,
    },
    /// Give a treasure card to another adventurer.
    PassCard {
        /// Seat giving the card.
        from: usize,
        /// Index of the card in the giver's hand.
        card_index: usize,
        /// Seat receiving the card.
        to: usize,
    },
    /// Trade four matching cards for the treasure on the current tile.
    CollectTreasure {
        /// Seat collecting.
        player: usize,
        /// Treasure claimed.
        treasure: Treasure,
    },
    /// Play Sandbags from any hand onto a flooded tile.
    PlaySandbags {
        /// Seat whose turn it is.
        player: usize,
        /// Seat holding the card.
        owner: usize,
        /// Index of the card in the owner's hand.
        card_index: usize,
        /// Tile to shore up.
        tile: Coord,
    },
    /// Play Helicopter Lift from any hand to fly adventurers sharing a tile.
    PlayHeliLift {
        /// Seat whose turn it is.
        player: usize,
        /// Seat holding the card.
        owner: usize,
        /// Index of the card in the owner's hand.
        card_index: usize,
        /// Seats flown, ascending.
        adventurers: Vec<usize>,
        /// Tile they leave.
        from: Coord,
        /// Tile they land on.
        to: Coord,
    },
    /// Play Helicopter Lift from Fools' Landing with every treasure in hand.
    LiftOff {
        /// Seat whose turn it is.
        player: usize,
        /// Seat holding the card.
        owner: usize,
        /// Index of the card in the owner's hand.
        card_index: usize,
    },
    /// Discard down to the hand limit.
    Discard {
        /// Seat discarding.
        player: usize,
        /// Index of the card in the hand.
        card_index: usize,
    },
}

impl Action {
    /// Returns whether applying the action spends one of the turn's actions.
    #[must_use]
    pub const fn costs_action(&self) -> bool {
        matches!(
            self,
            Self::Move { .. }
                | Self::Shore { .. }
                | Self::PassCard { .. }
                | Self::CollectTreasure { .. }
        )
    }
}
