//! Ordered card collection shared by the shoe and hands.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::PileError;

/// An ordered card collection.
///
/// Draws remove from the front and appends go to the back, so a shuffled
/// pile deals in random order without further bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Pile {
    cards: VecDeque<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the first card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, PileError> {
        self.cards.pop_front().ok_or(PileError::Empty)
    }

    /// Appends a card face-up.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Appends a card face-down.
    pub fn push_hidden(&mut self, mut card: Card) {
        card.hide();
        self.cards.push_back(card);
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfRange`] if `index` is invalid.
    pub fn get(&self, index: usize) -> Result<&Card, PileError> {
        self.cards.get(index).ok_or(PileError::OutOfRange(index))
    }

    /// Returns the card at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfRange`] if `index` is invalid.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Card, PileError> {
        self.cards
            .get_mut(index)
            .ok_or(PileError::OutOfRange(index))
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfRange`] if `index` is invalid.
    pub fn remove(&mut self, index: usize) -> Result<Card, PileError> {
        self.cards.remove(index).ok_or(PileError::OutOfRange(index))
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterates over the cards mutably, front to back.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    /// Re-permutes the cards uniformly at random.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }
}
