//! Round outcome types.

use crate::error::BetError;

/// How a single player hand resolved.
///
/// Returned by the per-hand play routine; the round controller branches on
/// it explicitly. `Split` asks the controller to re-form the hands and play
/// each of the two resulting hands on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPlay {
    /// The hand stood at `score`, wagering `bet` (doubled if the player
    /// doubled down).
    Stood {
        /// Final score, at most 21.
        score: u8,
        /// Total stake on the hand.
        bet: u32,
    },
    /// The hand went over 21 with no ace left to soften.
    Busted {
        /// Total stake lost.
        bet: u32,
    },
    /// A two-card 21 at the start of the hand's turn.
    Blackjack,
    /// The player chose to split the pair.
    Split,
}

/// An outcome announcement delivered to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The shoe fell to the reshuffle threshold and was refilled.
    Reshuffled,
    /// The dealer shows an ace; the hole card is about to be checked.
    CheckingDealerBlackjack,
    /// The hole card did not complete a blackjack.
    NoDealerBlackjack,
    /// The dealer has a natural blackjack; the round is settled.
    DealerBlackjack {
        /// The main bet, which is lost.
        bet: u32,
        /// The insurance stake, if one was taken; it pays 2:1.
        insurance: Option<u32>,
    },
    /// The player's hand is a natural blackjack.
    PlayerBlackjack {
        /// Winnings beyond the returned stake (1.5× the bet, floored).
        winnings: u32,
    },
    /// A player hand went over 21.
    PlayerBusted {
        /// The stake lost.
        bet: u32,
    },
    /// The dealer went over 21; every live hand wins.
    DealerBusted {
        /// Combined stake of the live hands, won once over.
        bet: u32,
    },
    /// A live hand outscored the dealer.
    PlayerWon {
        /// The player hand's score.
        player_score: u8,
        /// The dealer's score.
        dealer_score: u8,
        /// The stake, won once over.
        bet: u32,
    },
    /// The dealer outscored a live hand.
    DealerWon {
        /// The player hand's score.
        player_score: u8,
        /// The dealer's score.
        dealer_score: u8,
        /// The stake lost.
        bet: u32,
    },
    /// Tied scores; the stake is returned.
    Push {
        /// The tied score.
        score: u8,
        /// The returned stake.
        bet: u32,
    },
    /// The player doubled down.
    DoubleDown {
        /// The additional stake debited (equal to the original bet).
        bet: u32,
    },
    /// The split hand is about to be played.
    FirstSplitHand,
    /// Play returns to the original hand.
    SecondSplitHand,
    /// A bet was rejected; the prompt repeats.
    InvalidBet(BetError),
    /// The player's balance reached zero; the game is over.
    OutOfChips,
    /// The game loop ended.
    GameOver(Summary),
}

/// Final tally reported when the game loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Balance when the game started.
    pub starting_chips: u32,
    /// Balance when the game ended.
    pub final_chips: u32,
}

impl Summary {
    /// Chip delta for the session: positive when the player came out ahead.
    #[must_use]
    pub const fn net(&self) -> i64 {
        self.final_chips as i64 - self.starting_chips as i64
    }
}
