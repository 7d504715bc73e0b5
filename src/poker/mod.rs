//! Single-player jacks-or-better video poker.
//!
//! A round is: [`VideoPoker::place_wager`], [`VideoPoker::deal`], up to
//! `max_draws` calls to [`VideoPoker::draw`], then [`VideoPoker::settle`].
//! [`VideoPoker::new_round`] puts a fresh deck in the machine.

extern crate alloc;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, standard_deck};
use crate::error::{DrawError, WagerError};
use crate::options::PokerOptions;
use crate::pile::Pile;

mod rank;

pub use rank::PokerHand;

/// Cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// A video-poker machine.
#[derive(Debug, Clone)]
pub struct VideoPoker {
    /// Game options.
    pub options: PokerOptions,
    /// Cards left in the machine.
    pub deck: Pile<Card>,
    /// The player's hand.
    pub hand: Pile<Card>,
    /// Player balance.
    pub balance: usize,
    /// Wager for the current round.
    pub wager: usize,
    /// Draws taken this round.
    pub draws: usize,
    /// Rounds started, counting the first.
    pub round: usize,
    /// Whether the current round has been paid out.
    settled: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl VideoPoker {
    /// Creates a machine with a shuffled deck and the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use islandrs::{PokerOptions, VideoPoker};
    ///
    /// let mut machine = VideoPoker::new(PokerOptions::default(), 7);
    /// machine.place_wager(5).unwrap();
    /// machine.deal().unwrap();
    /// machine.draw(&[0, 1]).unwrap();
    /// let prize = machine.settle().unwrap();
    /// assert_eq!(machine.balance, 95 + prize);
    /// ```
    #[must_use]
    pub fn new(options: PokerOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::fresh_deck(&mut rng);

        Self {
            options,
            deck,
            hand: Pile::new(),
            balance: options.starting_balance,
            wager: 0,
            draws: 0,
            round: 1,
            settled: false,
            rng,
        }
    }

    fn fresh_deck(rng: &mut ChaCha8Rng) -> Pile<Card> {
        let mut deck = Pile::from_vec(standard_deck());
        deck.shuffle(rng);
        deck
    }

    /// Takes the wager for the round from the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, exceeds the balance, or a
    /// wager is already down.
    pub fn place_wager(&mut self, amount: usize) -> Result<(), WagerError> {
        if self.wager != 0 || !self.hand.is_empty() {
            return Err(WagerError::InvalidState);
        }
        if amount == 0 {
            return Err(WagerError::ZeroWager);
        }
        if amount > self.balance {
            return Err(WagerError::InsufficientFunds);
        }

        self.balance -= amount;
        self.wager = amount;
        Ok(())
    }

    fn ensure_can_deal(&self) -> Result<(), DrawError> {
        if self.wager == 0 || !self.hand.is_empty() {
            return Err(DrawError::InvalidState);
        }
        Ok(())
    }

    /// Deals five cards from the top of the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if no wager is down, a hand is already dealt, or the
    /// deck is short.
    pub fn deal(&mut self) -> Result<(), DrawError> {
        self.ensure_can_deal()?;
        if self.deck.len() < HAND_SIZE {
            return Err(DrawError::NotEnoughCards);
        }

        for _ in 0..HAND_SIZE {
            if let Some(card) = self.deck.pop() {
                self.hand.push(card);
            }
        }
        Ok(())
    }

    /// Deals exactly `cards`, taking each out of the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if no wager is down, a hand is already dealt, `cards`
    /// is not five cards, or a card is not in the deck. Nothing is dealt on
    /// error.
    pub fn deal_cards(&mut self, cards: &[Card]) -> Result<(), DrawError> {
        self.ensure_can_deal()?;
        if cards.len() != HAND_SIZE {
            return Err(DrawError::HandSize(cards.len()));
        }
        for (i, card) in cards.iter().enumerate() {
            if !self.deck.contains(card) || cards[..i].contains(card) {
                return Err(DrawError::CardNotInDeck);
            }
        }

        for card in cards {
            let dealt = self
                .deck
                .remove(card)
                .map_err(|_| DrawError::CardNotInDeck)?;
            self.hand.push(dealt);
        }
        Ok(())
    }

    /// Replaces every card not listed in `held` with a card from the deck,
    /// keeping positions.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is dealt, the draws are used up, a held
    /// index is outside the hand, or the deck is short.
    pub fn draw(&mut self, held: &[usize]) -> Result<(), DrawError> {
        if self.hand.len() != HAND_SIZE || self.is_round_over() {
            return Err(DrawError::InvalidState);
        }
        if let Some(&bad) = held.iter().find(|&&i| i >= HAND_SIZE) {
            return Err(DrawError::BadHoldIndex(bad));
        }

        let replaced: Vec<usize> = (0..HAND_SIZE).filter(|i| !held.contains(i)).collect();
        if self.deck.len() < replaced.len() {
            return Err(DrawError::NotEnoughCards);
        }

        for index in replaced {
            if let Some(card) = self.deck.pop() {
                self.hand
                    .replace(index, card)
                    .map_err(|_| DrawError::BadHoldIndex(index))?;
            }
        }
        self.draws += 1;
        Ok(())
    }

    /// Ranks the current hand.
    #[must_use]
    pub fn hand_rank(&self) -> PokerHand {
        PokerHand::evaluate(self.hand.cards())
    }

    /// Returns the prize the current hand would pay.
    #[must_use]
    pub fn prize(&self) -> usize {
        self.options.prize_table.payout(self.hand_rank()) * self.wager
    }

    /// Pays out the finished round and returns the prize.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over or was already paid.
    pub fn settle(&mut self) -> Result<usize, DrawError> {
        if !self.is_round_over() || self.settled {
            return Err(DrawError::InvalidState);
        }
        let prize = self.prize();
        self.balance += prize;
        self.settled = true;
        Ok(prize)
    }

    /// Clears the hand and wager and loads a fresh shuffled deck.
    pub fn new_round(&mut self) {
        self.hand.clear();
        self.deck = Self::fresh_deck(&mut self.rng);
        self.wager = 0;
        self.draws = 0;
        self.settled = false;
        self.round += 1;
    }

    /// Returns whether every draw of the round has been taken.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.hand.len() == HAND_SIZE && self.draws >= self.options.max_draws
    }

    /// Returns whether the round is paid out and the balance is gone.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.settled && self.balance == 0
    }
}
