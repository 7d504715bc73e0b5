//! Adventurer roles and their capabilities.
//!
//! Every role starts from the standard capability set and overrides a single
//! axis of it. Roles are plain data; the engine reads the capability record
//! rather than matching on the role.

use super::board::Reach;

/// The role a player takes for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Swims through flooded and sunken tiles.
    Diver,
    /// Shores up two tiles for one action.
    Engineer,
    /// Moves and shores diagonally.
    Explorer,
    /// Gives treasure cards to anyone, anywhere.
    Messenger,
    /// Moves other adventurers up to two spaces.
    Navigator,
    /// Flies to any tile once per turn.
    Pilot,
}

/// What a role can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Where the adventurer may walk.
    pub moves: &'static [Reach],
    /// Which tiles the adventurer may shore up.
    pub shores: &'static [Reach],
    /// Tiles shored by one shore action.
    pub shores_per_action: usize,
    /// Whether cards may be given to adventurers on other tiles.
    pub passes_anywhere: bool,
    /// Where other adventurers may be sent.
    pub moves_others: Option<Reach>,
    /// Whether one flight to any tile is allowed per turn.
    pub flies: bool,
    /// Whether the adventurer may swim through water.
    pub swims: bool,
    /// Tile the adventurer starts on.
    pub starting_tile: &'static str,
}

const STANDARD: Capabilities = Capabilities {
    moves: &[Reach::Adjacent],
    shores: &[Reach::Same, Reach::Adjacent],
    shores_per_action: 1,
    passes_anywhere: false,
    moves_others: None,
    flies: false,
    swims: false,
    starting_tile: "",
};

impl Role {
    /// All roles.
    pub const ALL: [Self; 6] = [
        Self::Diver,
        Self::Engineer,
        Self::Explorer,
        Self::Messenger,
        Self::Navigator,
        Self::Pilot,
    ];

    /// Returns the role's capability record.
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Self::Diver => Capabilities {
                swims: true,
                starting_tile: "Iron Gate",
                ..STANDARD
            },
            Self::Engineer => Capabilities {
                shores_per_action: 2,
                starting_tile: "Bronze Gate",
                ..STANDARD
            },
            Self::Explorer => Capabilities {
                moves: &[Reach::Adjacent, Reach::Diagonal],
                shores: &[Reach::Same, Reach::Adjacent, Reach::Diagonal],
                starting_tile: "Copper Gate",
                ..STANDARD
            },
            Self::Messenger => Capabilities {
                passes_anywhere: true,
                starting_tile: "Silver Gate",
                ..STANDARD
            },
            Self::Navigator => Capabilities {
                moves_others: Some(Reach::DoubleAdjacent),
                starting_tile: "Gold Gate",
                ..STANDARD
            },
            Self::Pilot => Capabilities {
                flies: true,
                starting_tile: super::tile::FOOLS_LANDING,
                ..STANDARD
            },
        }
    }

    /// Display name of the role.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diver => "Diver",
            Self::Engineer => "Engineer",
            Self::Explorer => "Explorer",
            Self::Messenger => "Messenger",
            Self::Navigator => "Navigator",
            Self::Pilot => "Pilot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::island::tile::TILES;

    #[test]
    fn starting_tiles_exist_and_differ() {
        for (i, role) in Role::ALL.iter().enumerate() {
            let start = role.capabilities().starting_tile;
            assert!(TILES.iter().any(|t| t.name == start));
            assert!(
                Role::ALL
                    .iter()
                    .skip(i + 1)
                    .all(|r| r.capabilities().starting_tile != start)
            );
        }
    }

    #[test]
    fn explorer_adds_diagonals() {
        let caps = Role::Explorer.capabilities();
        assert!(caps.moves.contains(&Reach::Diagonal));
        assert!(caps.shores.contains(&Reach::Diagonal));
        assert_eq!(Role::Messenger.capabilities().moves, &[Reach::Adjacent]);
    }
}
