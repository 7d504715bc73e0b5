//! Events reported by [`IslandGame::apply`](super::IslandGame::apply).

use super::board::Coord;
use super::cards::TreasureCard;
use super::state::Outcome;
use super::tile::Treasure;

/// Which deck was rebuilt from its discard pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckKind {
    /// The treasure deck.
    Treasure,
    /// The flood deck.
    Flood,
}

/// Something that happened while an action resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An adventurer changed tiles.
    Moved {
        /// Seat moved.
        adventurer: usize,
        /// Tile left.
        from: Coord,
        /// Tile reached.
        to: Coord,
    },
    /// The Pilot used the turn's flight.
    Flew {
        /// Seat of the Pilot.
        player: usize,
    },
    /// A tile was shored up.
    Shored {
        /// Tile shored.
        tile: Coord,
    },
    /// A card changed hands.
    CardPassed {
        /// Giver.
        from: usize,
        /// Receiver.
        to: usize,
        /// Card given.
        card: TreasureCard,
    },
    /// A treasure was claimed.
    TreasureCollected {
        /// Collector.
        player: usize,
        /// Treasure claimed.
        treasure: Treasure,
    },
    /// A card went to the treasure discard.
    Discarded {
        /// Seat that held the card.
        player: usize,
        /// Card discarded.
        card: TreasureCard,
    },
    /// A treasure card was drawn into a hand.
    CardDrawn {
        /// Seat drawing.
        player: usize,
        /// Card drawn.
        card: TreasureCard,
    },
    /// A Waters Rise card was drawn.
    WatersRose {
        /// New water meter index.
        level: usize,
    },
    /// A discard pile was shuffled back into its deck.
    Reshuffled {
        /// Deck rebuilt.
        deck: DeckKind,
    },
    /// A tile flooded.
    TileFlooded {
        /// Tile flooded.
        tile: Coord,
    },
    /// A tile sank.
    TileSunk {
        /// Tile sunk.
        tile: Coord,
    },
    /// An adventurer swam off a sinking tile.
    Swam {
        /// Seat that swam.
        adventurer: usize,
        /// Tile reached.
        to: Coord,
    },
    /// An adventurer went down with a tile.
    Drowned {
        /// Seat drowned.
        adventurer: usize,
    },
    /// The turn passed to the next seat.
    TurnPassed {
        /// Seat now acting.
        next: usize,
    },
    /// The game ended.
    GameEnded {
        /// Final outcome.
        outcome: Outcome,
    },
}
