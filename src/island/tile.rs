//! Tiles, flood states and treasures.

use super::board::Coord;

/// One of the four treasures hidden on the island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Treasure {
    /// The Earth Stone.
    EarthStone,
    /// The Statue of the Wind.
    StatueOfTheWind,
    /// The Crystal of Fire.
    CrystalOfFire,
    /// The Ocean's Chalice.
    OceansChalice,
}

impl Treasure {
    /// All treasures.
    pub const ALL: [Self; 4] = [
        Self::EarthStone,
        Self::StatueOfTheWind,
        Self::CrystalOfFire,
        Self::OceansChalice,
    ];

    /// Display name of the treasure.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EarthStone => "The Earth Stone",
            Self::StatueOfTheWind => "The Statue of the Wind",
            Self::CrystalOfFire => "The Crystal of Fire",
            Self::OceansChalice => "The Ocean's Chalice",
        }
    }
}

/// How far a tile has gone under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FloodState {
    /// Dry land.
    Normal,
    /// Flooded, but can still be shored up.
    Flooded,
    /// Gone for good.
    Sunken,
}

/// Static description of a tile before it is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpec {
    /// Unique tile name.
    pub name: &'static str,
    /// Treasure that can be collected here.
    pub treasure: Option<Treasure>,
    /// Whether the island is left from this tile.
    pub is_exit: bool,
}

impl TileSpec {
    const fn plain(name: &'static str) -> Self {
        Self {
            name,
            treasure: None,
            is_exit: false,
        }
    }

    const fn treasure(name: &'static str, treasure: Treasure) -> Self {
        Self {
            name,
            treasure: Some(treasure),
            is_exit: false,
        }
    }
}

/// Name of the tile the island is escaped from.
pub const FOOLS_LANDING: &str = "Fools' Landing";

/// The 24 tiles of the island.
pub const TILES: [TileSpec; 24] = [
    TileSpec::plain("Watchtower"),
    TileSpec::plain("Breakers Bridge"),
    TileSpec::plain("Dunes of Deception"),
    TileSpec::plain("Phantom Rock"),
    TileSpec::plain("Twilight Hollow"),
    TileSpec::plain("Crimson Forest"),
    TileSpec::plain("Cliffs of Abandon"),
    TileSpec::plain("Lost Lagoon"),
    TileSpec::plain("Misty Marsh"),
    TileSpec::plain("Observatory"),
    TileSpec::plain("Gold Gate"),
    TileSpec::plain("Bronze Gate"),
    TileSpec::plain("Silver Gate"),
    TileSpec::plain("Iron Gate"),
    TileSpec::plain("Copper Gate"),
    TileSpec {
        name: FOOLS_LANDING,
        treasure: None,
        is_exit: true,
    },
    TileSpec::treasure("Cave of Embers", Treasure::CrystalOfFire),
    TileSpec::treasure("Cave of Shadows", Treasure::CrystalOfFire),
    TileSpec::treasure("Temple of the Moon", Treasure::EarthStone),
    TileSpec::treasure("Temple of the Sun", Treasure::EarthStone),
    TileSpec::treasure("Howling Garden", Treasure::StatueOfTheWind),
    TileSpec::treasure("Whispering Garden", Treasure::StatueOfTheWind),
    TileSpec::treasure("Coral Palace", Treasure::OceansChalice),
    TileSpec::treasure("Tidal Palace", Treasure::OceansChalice),
];

/// A placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Unique tile name.
    pub name: &'static str,
    /// Treasure that can be collected here.
    pub treasure: Option<Treasure>,
    /// Whether the island is left from this tile.
    pub is_exit: bool,
    /// Where the tile sits on the board.
    pub coord: Coord,
    flood: FloodState,
}

impl Tile {
    /// Places a tile at `coord`, dry.
    #[must_use]
    pub const fn new(spec: TileSpec, coord: Coord) -> Self {
        Self {
            name: spec.name,
            treasure: spec.treasure,
            is_exit: spec.is_exit,
            coord,
            flood: FloodState::Normal,
        }
    }

    /// Returns the flood state.
    #[must_use]
    pub const fn flood(&self) -> FloodState {
        self.flood
    }

    /// Returns whether the tile is flooded (not sunken).
    #[must_use]
    pub const fn is_flooded(&self) -> bool {
        matches!(self.flood, FloodState::Flooded)
    }

    /// Returns whether the tile has sunk.
    #[must_use]
    pub const fn is_sunken(&self) -> bool {
        matches!(self.flood, FloodState::Sunken)
    }

    /// Pushes the tile one step under water. A sunken tile stays sunken.
    pub const fn sink(&mut self) {
        self.flood = match self.flood {
            FloodState::Normal => FloodState::Flooded,
            FloodState::Flooded | FloodState::Sunken => FloodState::Sunken,
        };
    }

    /// Brings a flooded tile back to normal. No effect otherwise.
    pub const fn shore(&mut self) {
        if let FloodState::Flooded = self.flood {
            self.flood = FloodState::Normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile() -> Tile {
        Tile::new(TILES[0], Coord::new(0, 2))
    }

    #[test]
    fn sink_stops_at_sunken() {
        let mut t = tile();
        t.sink();
        assert_eq!(t.flood(), FloodState::Flooded);
        t.sink();
        assert_eq!(t.flood(), FloodState::Sunken);
        t.sink();
        assert_eq!(t.flood(), FloodState::Sunken);
    }

    #[test]
    fn shore_only_lifts_flooded() {
        let mut t = tile();
        t.shore();
        assert_eq!(t.flood(), FloodState::Normal);

        t.sink();
        t.shore();
        assert_eq!(t.flood(), FloodState::Normal);

        t.sink();
        t.sink();
        t.shore();
        assert!(t.is_sunken());
    }

    #[test]
    fn tile_names_are_unique() {
        for (i, a) in TILES.iter().enumerate() {
            assert!(TILES.iter().skip(i + 1).all(|b| a.name != b.name));
        }
        assert_eq!(TILES.iter().filter(|t| t.is_exit).count(), 1);
        for treasure in Treasure::ALL {
            assert_eq!(
                TILES.iter().filter(|t| t.treasure == Some(treasure)).count(),
                2
            );
        }
    }
}
