//! The cooperative island game.
//!
//! [`IslandGame`] owns the board, the decks, the water meter and every
//! player's hand and position. The engine driving it asks for
//! [`IslandGame::legal_actions`], lets a player pick one, and hands it back
//! to [`IslandGame::apply`]. Everything else happens inside `apply`,
//! including the end-of-turn draw and flood.

extern crate alloc;

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::SetupError;
use crate::options::IslandOptions;
use crate::pile::Pile;

pub mod action;
mod actions;
pub mod adventurer;
pub mod board;
pub mod cards;
pub mod events;
mod legal;
pub mod state;
pub mod tile;
mod turn;
pub mod water;

pub use action::Action;
pub use adventurer::{Capabilities, Role};
pub use board::{BOARD_SIZE, Board, Coord, Reach, STANDARD_LAYOUT, Space};
pub use cards::{FloodCard, TreasureCard};
pub use events::{DeckKind, GameEvent};
pub use state::{LossReason, Outcome, TurnPhase};
pub use tile::{FOOLS_LANDING, FloodState, TILES, Tile, TileSpec, Treasure};
pub use water::{WATER_LEVELS, WaterLevel, WaterMeter};

/// Fewest players the island supports.
pub const MIN_PLAYERS: usize = 2;
/// Most players the island supports.
pub const MAX_PLAYERS: usize = 4;

/// A game of the sinking island.
///
/// The state is mutated in place for the life of the game. Fields are public
/// so callers and tests can arrange exact positions; use
/// [`IslandGame::apply`] to play.
#[derive(Debug, Clone)]
pub struct IslandGame {
    /// Game options.
    pub options: IslandOptions,
    /// The island.
    pub board: Board,
    /// The water meter.
    pub water: WaterMeter,
    /// Treasure cards still to draw.
    pub treasure_deck: Pile<TreasureCard>,
    /// Spent treasure cards.
    pub treasure_discard: Pile<TreasureCard>,
    /// Flood cards still to draw.
    pub flood_deck: Pile<FloodCard>,
    /// Flood cards of tiles still above water.
    pub flood_discard: Pile<FloodCard>,
    /// Each seat's hand.
    pub hands: Vec<Pile<TreasureCard>>,
    /// Each seat's role.
    pub roles: Vec<Role>,
    /// Each seat's adventurer position.
    pub positions: Vec<Coord>,
    /// Treasures claimed so far.
    pub collected: Vec<Treasure>,
    /// Seat whose turn it is.
    pub turn: usize,
    /// Actions spent this turn.
    pub actions_taken: usize,
    /// Pilot flights used this turn.
    pub flights_taken: usize,
    /// Whether the active player chose to end the turn.
    pub passing: bool,
    /// Whether the end-of-turn treasure draw already happened.
    treasure_drawn: bool,
    /// Win or drowning, once either has happened.
    ended: Option<Outcome>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl IslandGame {
    /// Creates a game with roles dealt at random.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count or starting water level is out of
    /// range.
    ///
    /// # Example
    ///
    /// ```
    /// use islandrs::{IslandGame, IslandOptions};
    ///
    /// let game = IslandGame::new(IslandOptions::default().with_players(3), 42).unwrap();
    /// assert_eq!(game.player_count(), 3);
    /// ```
    pub fn new(options: IslandOptions, seed: u64) -> Result<Self, SetupError> {
        Self::check_player_count(options.players)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut roles = Role::ALL.to_vec();
        roles.shuffle(&mut rng);
        roles.truncate(options.players);
        Self::setup(options, roles, rng)
    }

    /// Creates a game with the given roles, one per seat.
    ///
    /// The player count is taken from `roles`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are too few or too many roles, a role
    /// repeats, or the starting water level is out of range.
    pub fn with_roles(
        options: IslandOptions,
        roles: &[Role],
        seed: u64,
    ) -> Result<Self, SetupError> {
        Self::check_player_count(roles.len())?;
        for (i, role) in roles.iter().enumerate() {
            if roles[i + 1..].contains(role) {
                return Err(SetupError::DuplicateRole(*role));
            }
        }
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Self::setup(options.with_players(roles.len()), roles.to_vec(), rng)
    }

    const fn check_player_count(players: usize) -> Result<(), SetupError> {
        if players < MIN_PLAYERS || players > MAX_PLAYERS {
            return Err(SetupError::InvalidPlayerCount(players));
        }
        Ok(())
    }

    fn setup(
        options: IslandOptions,
        roles: Vec<Role>,
        mut rng: ChaCha8Rng,
    ) -> Result<Self, SetupError> {
        if options.water_level >= water::STARTING_LEVELS {
            return Err(SetupError::InvalidWaterLevel(options.water_level));
        }

        let mut board = Board::new(&STANDARD_LAYOUT, &TILES, &mut rng)?;

        // The island starts to sink.
        let mut flood_deck = Pile::from_vec(cards::flood_deck());
        flood_deck.shuffle(&mut rng);
        let mut flood_discard = Pile::new();
        for _ in 0..options.initial_floods {
            let Some(card) = flood_deck.pop() else {
                break;
            };
            if let Some(coord) = board.coord_of(card.tile) {
                if let Some(tile) = board.tile_at_mut(coord) {
                    tile.sink();
                }
            }
            flood_discard.push(card);
        }

        let positions = roles
            .iter()
            .map(|role| {
                let start = role.capabilities().starting_tile;
                board.coord_of(start).ok_or(SetupError::UnknownTile(start))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut treasure_deck = Pile::from_vec(cards::treasure_deck());
        treasure_deck.shuffle(&mut rng);
        let mut hands: Vec<Pile<TreasureCard>> = roles.iter().map(|_| Pile::new()).collect();
        Self::deal_opening_hands(&mut treasure_deck, &mut hands, &mut rng);

        let turn = rng.random_range(0..roles.len());

        Ok(Self {
            options,
            board,
            water: WaterMeter::new(options.water_level),
            treasure_deck,
            treasure_discard: Pile::new(),
            flood_deck,
            flood_discard,
            hands,
            roles,
            positions,
            collected: Vec::new(),
            turn,
            actions_taken: 0,
            flights_taken: 0,
            passing: false,
            treasure_drawn: false,
            ended: None,
            rng,
        })
    }

    /// Deals two cards to each hand. Waters Rise cards are set aside and
    /// shuffled back in afterwards.
    fn deal_opening_hands(
        deck: &mut Pile<TreasureCard>,
        hands: &mut [Pile<TreasureCard>],
        rng: &mut ChaCha8Rng,
    ) {
        let mut set_aside = Pile::new();
        for _ in 0..2 {
            for hand in hands.iter_mut() {
                while let Some(card) = deck.pop() {
                    if card == TreasureCard::WatersRise {
                        set_aside.push(card);
                    } else {
                        hand.push(card);
                        break;
                    }
                }
            }
        }
        if !set_aside.is_empty() {
            deck.append(&mut set_aside);
            deck.shuffle(rng);
        }
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roles.len()
    }

    /// Returns the seat whose turn it is.
    #[must_use]
    pub const fn active_player(&self) -> usize {
        self.turn
    }

    /// Returns the role of a seat.
    #[must_use]
    pub fn role(&self, player: usize) -> Option<Role> {
        self.roles.get(player).copied()
    }

    /// Returns the position of a seat's adventurer.
    #[must_use]
    pub fn position(&self, player: usize) -> Option<Coord> {
        self.positions.get(player).copied()
    }

    /// Returns the tile a seat's adventurer stands on.
    #[must_use]
    pub fn tile_of(&self, player: usize) -> Option<&Tile> {
        self.position(player).and_then(|c| self.board.tile_at(c))
    }

    /// Returns the seats standing on `coord`, ascending.
    #[must_use]
    pub fn adventurers_at(&self, coord: Coord) -> Vec<usize> {
        self.positions
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p == coord)
            .map(|(seat, _)| seat)
            .collect()
    }

    /// Returns a seat's hand.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<&[TreasureCard]> {
        self.hands.get(player).map(Pile::cards)
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the water meter.
    #[must_use]
    pub const fn water_meter(&self) -> &WaterMeter {
        &self.water
    }

    /// Returns the treasures claimed so far.
    #[must_use]
    pub fn collected(&self) -> &[Treasure] {
        &self.collected
    }

    /// Returns whether the active player has used up the turn.
    const fn turn_ending(&self) -> bool {
        self.passing || self.treasure_drawn || self.actions_taken >= self.options.actions_per_turn
    }

    fn over_limit(&self, player: usize) -> bool {
        self.hands
            .get(player)
            .is_some_and(|h| h.len() > self.options.hand_limit)
    }

    /// Returns the current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.is_game_over() {
            TurnPhase::GameOver
        } else if self.turn_ending() && self.over_limit(self.turn) {
            TurnPhase::ForcedDiscard { player: self.turn }
        } else {
            TurnPhase::Actions
        }
    }

    /// Returns how the game stands.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if let Some(outcome) = self.ended {
            return outcome;
        }
        if self.water.is_death_level() {
            return Outcome::Lost(LossReason::WaterLevel);
        }
        if self
            .board
            .tile_named(FOOLS_LANDING)
            .is_some_and(Tile::is_sunken)
        {
            return Outcome::Lost(LossReason::ExitSunk);
        }
        for treasure in Treasure::ALL {
            if self.collected.contains(&treasure) {
                continue;
            }
            let mut homes = self
                .board
                .tiles()
                .filter(|t| t.treasure == Some(treasure))
                .peekable();
            if homes.peek().is_some() && homes.all(Tile::is_sunken) {
                return Outcome::Lost(LossReason::TreasureLost(treasure));
            }
        }
        Outcome::InProgress
    }

    /// Returns whether the game has ended, won or lost.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }
}
