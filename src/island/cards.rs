//! Treasure-deck and flood-deck cards.

extern crate alloc;

use alloc::vec::Vec;

use super::tile::{TILES, Treasure};

/// A card from the treasure deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreasureCard {
    /// One of the four treasure suits; four of a kind claim the treasure.
    Treasure(Treasure),
    /// Raises the water meter when drawn; never held.
    WatersRise,
    /// Flies a group of adventurers between tiles, or off the island.
    HelicopterLift,
    /// Shores up any flooded tile.
    Sandbags,
}

impl TreasureCard {
    /// Returns whether the card may be played at any time without spending an
    /// action.
    #[must_use]
    pub const fn is_instant(self) -> bool {
        matches!(self, Self::HelicopterLift | Self::Sandbags)
    }

    /// Display name of the card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Treasure(treasure) => treasure.name(),
            Self::WatersRise => "Waters Rise!",
            Self::HelicopterLift => "Helicopter Lift",
            Self::Sandbags => "Sandbags",
        }
    }
}

/// Copies of each treasure card.
const TREASURE_COPIES: usize = 5;
const WATERS_RISE_COPIES: usize = 3;
const HELICOPTER_LIFT_COPIES: usize = 3;
const SANDBAGS_COPIES: usize = 2;

/// Returns the unshuffled 28-card treasure deck.
#[must_use]
pub fn treasure_deck() -> Vec<TreasureCard> {
    let mut cards = Vec::with_capacity(28);
    for treasure in Treasure::ALL {
        cards.extend([TreasureCard::Treasure(treasure); TREASURE_COPIES]);
    }
    cards.extend([TreasureCard::WatersRise; WATERS_RISE_COPIES]);
    cards.extend([TreasureCard::HelicopterLift; HELICOPTER_LIFT_COPIES]);
    cards.extend([TreasureCard::Sandbags; SANDBAGS_COPIES]);
    cards
}

/// A card from the flood deck, naming one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloodCard {
    /// The tile this card floods.
    pub tile: &'static str,
}

/// Returns the unshuffled flood deck, one card per tile.
#[must_use]
pub fn flood_deck() -> Vec<FloodCard> {
    TILES.iter().map(|t| FloodCard { tile: t.name }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treasure_deck_composition() {
        let deck = treasure_deck();
        assert_eq!(deck.len(), 28);
        let count = |card| deck.iter().filter(|&&c| c == card).count();
        assert_eq!(count(TreasureCard::WatersRise), 3);
        assert_eq!(count(TreasureCard::HelicopterLift), 3);
        assert_eq!(count(TreasureCard::Sandbags), 2);
        assert_eq!(count(TreasureCard::Treasure(Treasure::OceansChalice)), 5);
    }

    #[test]
    fn flood_deck_covers_every_tile() {
        assert_eq!(flood_deck().len(), TILES.len());
    }
}
