//! Ordered card collections.
//!
//! A [`Pile`] is the single collection type behind every deck, discard and
//! hand in the crate. The top of the pile is the end of the backing vector,
//! so [`Pile::push`] and [`Pile::pop`] are both O(1).

extern crate alloc;

use alloc::vec::Vec;
use core::slice;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::PileError;

/// A shuffleable, ordered collection of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile<T> {
    cards: Vec<T>,
}

impl<T> Default for Pile<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pile<T> {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile from cards, the last card being the top.
    #[must_use]
    pub const fn from_vec(cards: Vec<T>) -> Self {
        Self { cards }
    }

    /// Shuffles the pile in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Puts a card on top of the pile.
    pub fn push(&mut self, card: T) {
        self.cards.push(card);
    }

    /// Removes and returns the top card, or `None` if the pile is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.cards.pop()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.cards.last()
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::IndexOutOfRange`] if `index` is past the end.
    pub fn remove_at(&mut self, index: usize) -> Result<T, PileError> {
        if index >= self.cards.len() {
            return Err(PileError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Replaces the card at `index`, returning the old card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::IndexOutOfRange`] if `index` is past the end.
    pub fn replace(&mut self, index: usize, card: T) -> Result<T, PileError> {
        let len = self.cards.len();
        let slot = self
            .cards
            .get_mut(index)
            .ok_or(PileError::IndexOutOfRange { index, len })?;
        Ok(core::mem::replace(slot, card))
    }

    /// Moves every card of `other` on top of this pile, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        self.cards.append(&mut other.cards);
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[T] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.cards.get(index)
    }

    /// Iterates over the cards bottom to top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.cards.iter()
    }
}

impl<T: PartialEq> Pile<T> {
    /// Removes the first card equal to `card`.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotFound`] if no such card is in the pile.
    pub fn remove(&mut self, card: &T) -> Result<T, PileError> {
        let index = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(PileError::NotFound)?;
        Ok(self.cards.remove(index))
    }

    /// Returns how many cards equal `card`.
    #[must_use]
    pub fn count(&self, card: &T) -> usize {
        self.cards.iter().filter(|c| *c == card).count()
    }

    /// Returns whether the pile holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &T) -> bool {
        self.cards.contains(card)
    }
}

impl<T> From<Vec<T>> for Pile<T> {
    fn from(cards: Vec<T>) -> Self {
        Self::from_vec(cards)
    }
}

impl<T> FromIterator<T> for Pile<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Pile<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
