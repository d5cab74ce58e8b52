//! The multi-deck shoe.

use rand::Rng;

use crate::card::{Card, Rank, Suit};
use crate::error::PileError;
use crate::pile::Pile;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// The working deck: one or more 52-card decks shuffled together.
///
/// The shoe is refilled at game start and again between rounds whenever the
/// remaining cards fall to the configured reshuffle threshold. Within a
/// round its length only decreases.
#[derive(Debug, Clone, Default)]
pub struct Shoe {
    cards: Pile,
}

impl Shoe {
    /// Creates an empty shoe. Call [`Shoe::refill`] before dealing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the full card set (`decks` × 13 ranks × 4 suits) and
    /// shuffles it uniformly at random.
    pub fn refill<R: Rng>(&mut self, decks: u8, rng: &mut R) {
        self.cards.clear();
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(rank, suit));
                }
            }
        }
        self.shuffle(rng);
        log::debug!("shoe refilled with {} cards", self.cards.len());
    }

    /// Re-permutes the remaining cards uniformly at random.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::Empty`] if the shoe ran dry. With correct
    /// reshuffle timing this never happens mid-round.
    pub fn draw(&mut self) -> Result<Card, PileError> {
        self.cards.draw()
    }

    /// Replaces the contents with a known sequence; the first card given is
    /// drawn first. Useful for deterministic tests and replays.
    pub fn load<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.clear();
        for card in cards {
            self.cards.push(card);
        }
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
