//! Poker hand ranking.

use crate::card::Card;

/// The ranked outcome of a five-card hand, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PokerHand {
    /// Ten to ace in one suit.
    RoyalFlush,
    /// Five in sequence, one suit.
    StraightFlush,
    /// Four cards of one rank.
    FourOfAKind,
    /// Three of one rank and two of another.
    FullHouse,
    /// Five of one suit.
    Flush,
    /// Five in sequence.
    Straight,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Two pairs.
    TwoPair,
    /// A pair of jacks, queens, kings or aces.
    JacksOrBetter,
    /// Anything else.
    Nothing,
}

impl PokerHand {
    /// All hands, best first.
    pub const ALL: [Self; 10] = [
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::ThreeOfAKind,
        Self::TwoPair,
        Self::JacksOrBetter,
        Self::Nothing,
    ];

    /// Ranks five cards. Any other count is [`PokerHand::Nothing`].
    #[must_use]
    pub fn evaluate(cards: &[Card]) -> Self {
        if cards.len() != 5 {
            return Self::Nothing;
        }

        // Index 14 is the high ace; index 1 mirrors it for the wheel.
        let mut counts = [0u8; 15];
        for card in cards {
            let high = card.high_rank();
            if !(2..=14).contains(&high) {
                return Self::Nothing;
            }
            counts[usize::from(high)] += 1;
        }
        counts[1] = counts[14];

        let flush = cards.iter().all(|c| c.suit == cards[0].suit);
        let straight_top = (5..=14).rev().find(|&top| (top - 4..=top).all(|r| counts[r] == 1));

        let mut groups = [0u8; 6];
        for &n in &counts[2..] {
            groups[usize::from(n)] += 1;
        }
        let pair_is_high = (11..=14).any(|r| counts[r] == 2);

        match (flush, straight_top) {
            (true, Some(14)) => return Self::RoyalFlush,
            (true, Some(_)) => return Self::StraightFlush,
            _ => {}
        }
        if groups[4] == 1 {
            Self::FourOfAKind
        } else if groups[3] == 1 && groups[2] == 1 {
            Self::FullHouse
        } else if flush {
            Self::Flush
        } else if straight_top.is_some() {
            Self::Straight
        } else if groups[3] == 1 {
            Self::ThreeOfAKind
        } else if groups[2] == 2 {
            Self::TwoPair
        } else if groups[2] == 1 && pair_is_high {
            Self::JacksOrBetter
        } else {
            Self::Nothing
        }
    }

    /// Display name of the hand.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RoyalFlush => "Royal Flush",
            Self::StraightFlush => "Straight Flush",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::Flush => "Flush",
            Self::Straight => "Straight",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::TwoPair => "Two Pair",
            Self::JacksOrBetter => "Jacks or Better",
            Self::Nothing => "Nothing",
        }
    }
}
