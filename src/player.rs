//! Player and dealer accounts.

use crate::error::BetError;
use crate::hand::Hand;

/// The player: a chip balance plus a primary hand and a split hand.
///
/// The split hand stays empty unless a split occurs during the round.
#[derive(Debug, Clone)]
pub struct Player {
    chips: u32,
    /// Primary hand.
    pub hand: Hand,
    /// Second hand, populated only after a split.
    pub split_hand: Hand,
}

impl Player {
    /// Creates a player with the given starting balance.
    #[must_use]
    pub fn new(chips: u32) -> Self {
        Self {
            chips,
            hand: Hand::new(),
            split_hand: Hand::new(),
        }
    }

    /// Current chip balance.
    #[must_use]
    pub const fn chips(&self) -> u32 {
        self.chips
    }

    /// Credits the balance.
    pub const fn add_chips(&mut self, amount: u32) {
        self.chips += amount;
    }

    /// Debits the balance unconditionally.
    ///
    /// Callers must have validated `0 < amount <= chips` beforehand, via
    /// [`Player::validate_bet`] or an equivalent legality check.
    pub const fn place_bet(&mut self, amount: u32) {
        self.chips -= amount;
    }

    /// Clears both hands between rounds.
    pub fn reset_hands(&mut self) {
        self.hand.reset();
        self.split_hand.reset();
    }

    /// The shared betting rule: `0 < amount <= limit`.
    ///
    /// # Errors
    ///
    /// Returns the [`BetError`] describing which bound was violated.
    pub const fn validate_bet(amount: u32, limit: u32) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::Zero);
        }
        if amount > limit {
            return Err(BetError::TooLarge { limit });
        }
        Ok(())
    }
}

/// The dealer: a single hand, no chips.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    /// The dealer's hand. Its first card is dealt face-down.
    pub hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the hand between rounds.
    pub fn reset_hands(&mut self) {
        self.hand.reset();
    }
}
