//! Game configuration options.

use crate::poker::PokerHand;

/// Configuration options for an island game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use islandrs::IslandOptions;
///
/// let options = IslandOptions::default()
///     .with_players(3)
///     .with_water_level(1)
///     .with_hand_limit(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IslandOptions {
    /// Number of players (2 to 4).
    pub players: usize,
    /// Starting water level index (0 = Novice, 1 = Normal, 2 = Elite, 3 = Legendary).
    pub water_level: usize,
    /// Flood cards drawn at setup.
    pub initial_floods: usize,
    /// Maximum cards a hand may hold at the end of a turn.
    pub hand_limit: usize,
    /// Actions each player may take per turn.
    pub actions_per_turn: usize,
    /// Treasure cards drawn at the end of each turn.
    pub treasure_draws: usize,
}

impl Default for IslandOptions {
    fn default() -> Self {
        Self {
            players: 2,
            water_level: 0,
            initial_floods: 6,
            hand_limit: 5,
            actions_per_turn: 3,
            treasure_draws: 2,
        }
    }
}

impl IslandOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use islandrs::IslandOptions;
    ///
    /// let options = IslandOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the starting water level index.
    #[must_use]
    pub const fn with_water_level(mut self, level: usize) -> Self {
        self.water_level = level;
        self
    }

    /// Sets how many tiles are flooded at setup.
    #[must_use]
    pub const fn with_initial_floods(mut self, floods: usize) -> Self {
        self.initial_floods = floods;
        self
    }

    /// Sets the hand limit.
    #[must_use]
    pub const fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Sets the number of actions per turn.
    #[must_use]
    pub const fn with_actions_per_turn(mut self, actions: usize) -> Self {
        self.actions_per_turn = actions;
        self
    }

    /// Sets the number of treasure cards drawn at the end of a turn.
    #[must_use]
    pub const fn with_treasure_draws(mut self, draws: usize) -> Self {
        self.treasure_draws = draws;
        self
    }
}

/// Payout per unit wagered for each poker hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrizeTable {
    payouts: [usize; PokerHand::ALL.len()],
}

impl Default for PrizeTable {
    /// The jacks-or-better table.
    fn default() -> Self {
        Self::new()
            .with_payout(PokerHand::RoyalFlush, 976)
            .with_payout(PokerHand::StraightFlush, 50)
            .with_payout(PokerHand::FourOfAKind, 25)
            .with_payout(PokerHand::FullHouse, 9)
            .with_payout(PokerHand::Flush, 6)
            .with_payout(PokerHand::Straight, 4)
            .with_payout(PokerHand::ThreeOfAKind, 3)
            .with_payout(PokerHand::TwoPair, 2)
            .with_payout(PokerHand::JacksOrBetter, 1)
    }
}

impl PrizeTable {
    /// Creates a table that pays nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            payouts: [0; PokerHand::ALL.len()],
        }
    }

    /// Sets the payout for a hand.
    #[must_use]
    pub const fn with_payout(mut self, hand: PokerHand, payout: usize) -> Self {
        self.payouts[hand as usize] = payout;
        self
    }

    /// Returns the payout per unit wagered for a hand.
    #[must_use]
    pub const fn payout(&self, hand: PokerHand) -> usize {
        self.payouts[hand as usize]
    }
}

/// Configuration options for a video-poker game.
///
/// ```
/// use islandrs::{PokerHand, PokerOptions, PrizeTable};
///
/// let options = PokerOptions::default()
///     .with_starting_balance(250)
///     .with_prize_table(PrizeTable::default().with_payout(PokerHand::RoyalFlush, 800));
/// assert_eq!(options.prize_table.payout(PokerHand::RoyalFlush), 800);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PokerOptions {
    /// Balance the player starts with.
    pub starting_balance: usize,
    /// Draws allowed per round.
    pub max_draws: usize,
    /// Payout table.
    pub prize_table: PrizeTable,
}

impl Default for PokerOptions {
    fn default() -> Self {
        Self {
            starting_balance: 100,
            max_draws: 1,
            prize_table: PrizeTable::default(),
        }
    }
}

impl PokerOptions {
    /// Sets the starting balance.
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the draws allowed per round.
    #[must_use]
    pub const fn with_max_draws(mut self, draws: usize) -> Self {
        self.max_draws = draws;
        self
    }

    /// Sets the payout table.
    #[must_use]
    pub const fn with_prize_table(mut self, table: PrizeTable) -> Self {
        self.prize_table = table;
        self
    }
}
