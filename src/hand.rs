//! Player and dealer hand representation and scoring.

use crate::card::{Card, Rank};
use crate::error::PileError;
use crate::pile::Pile;

/// A hand of cards belonging to the player or the dealer.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Pile,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card face-up.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds a card face-down (the dealer's hole card).
    pub fn add_hidden(&mut self, card: Card) {
        self.cards.push_hidden(card);
    }

    /// Clears the hand for a new round.
    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfRange`] if `index` is invalid.
    pub fn get(&self, index: usize) -> Result<&Card, PileError> {
        self.cards.get(index)
    }

    /// Returns the card at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfRange`] if `index` is invalid.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Card, PileError> {
        self.cards.get_mut(index)
    }

    /// Iterates over the cards in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Whether any card is still face-down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(Card::hidden)
    }

    /// The hand's blackjack score.
    ///
    /// Sums the current card values; while the total exceeds 21 and an ace
    /// still counted as 11 remains, softens the first such ace and re-sums.
    /// Aces step down one at a time, so several aces each convert
    /// independently before the hand is considered busted.
    pub fn score(&mut self) -> u8 {
        let mut total = self.total();
        while total > 21 {
            let Some(ace) = self
                .cards
                .iter_mut()
                .find(|card| card.rank() == Rank::Ace && card.value() == 11)
            else {
                break;
            };
            ace.soften_ace();
            total = self.total();
        }
        total
    }

    /// Whether the hand may be split: exactly two cards of equal rank.
    #[must_use]
    pub fn splitable(&self) -> bool {
        self.cards.len() == 2
            && self
                .cards
                .get(0)
                .and_then(|first| self.cards.get(1).map(|second| first.rank() == second.rank()))
                .unwrap_or(false)
    }

    /// Whether the hand is a two-card 21.
    pub fn is_blackjack(&mut self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Whether the hand exceeds 21 with every ace already soft.
    pub fn is_busted(&mut self) -> bool {
        self.score() > 21
    }

    /// Resets every ace back to 11. A split re-forms the hands, so prior
    /// softening no longer applies.
    pub fn restore_aces(&mut self) {
        for card in self.cards.iter_mut() {
            card.restore_ace();
        }
    }

    /// Removes and returns the second card of a two-card hand (splitting).
    ///
    /// # Errors
    ///
    /// Returns [`PileError::OutOfRange`] if the hand holds fewer than two
    /// cards.
    pub fn take_split_card(&mut self) -> Result<Card, PileError> {
        self.cards.remove(1)
    }

    fn total(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |sum, card| sum.saturating_add(card.value()))
    }
}
