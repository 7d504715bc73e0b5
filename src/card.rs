//! Playing cards for the video-poker table.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    const fn symbol(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Ranks outside 1..=13 are accepted but never rank as a made hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Rank with the ace counted high (2..=14).
    #[must_use]
    pub const fn high_rank(self) -> u8 {
        if self.rank == 1 { 14 } else { self.rank }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns an unshuffled 52-card deck.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (1..=13).map(move |rank| Card::new(suit, rank)))
        .collect()
}

const RANK_SYMBOLS: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = usize::from(self.rank)
            .checked_sub(1)
            .and_then(|i| RANK_SYMBOLS.get(i))
            .copied()
            .unwrap_or('?');
        write!(f, "{rank}{}", self.suit.symbol())
    }
}

/// Parses the two-character notation used at the table, such as `As`,
/// `Td` or `9h`.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length);
        };

        let upper = r.to_ascii_uppercase();
        let rank = RANK_SYMBOLS
            .iter()
            .position(|&c| c == upper)
            .ok_or(ParseCardError::Rank(r))?;

        let suit = match su.to_ascii_lowercase() {
            'c' => Suit::Clubs,
            'd' => Suit::Diamonds,
            'h' => Suit::Hearts,
            's' => Suit::Spades,
            _ => return Err(ParseCardError::Suit(su)),
        };

        Ok(Self::new(suit, rank as u8 + 1))
    }
}
