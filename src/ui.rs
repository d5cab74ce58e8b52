//! The interface the round controller drives.

use core::fmt;

use crate::error::StopRequested;
use crate::hand::Hand;
use crate::result::Event;

/// A player decision during a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the current score.
    Stand,
    /// Double the stake, draw exactly one card, then stand.
    DoubleDown,
    /// Split the pair into two hands.
    Split,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::DoubleDown => "Double Down",
            Self::Split => "Split",
        })
    }
}

/// External collaborator for prompts and output.
///
/// The controller blocks on each prompt until a value is returned or
/// [`StopRequested`] is raised; the stop signal is honored at every prompt
/// and ends the game loop cleanly. Implementations should validate amounts
/// before returning them — the controller re-prompts on invalid values
/// either way, announcing [`Event::InvalidBet`] in between.
pub trait Ui {
    /// Asks for the main bet. `chips` is the full balance available.
    ///
    /// # Errors
    ///
    /// Returns [`StopRequested`] when the player asks to leave.
    fn bet_amount(&mut self, chips: u32) -> Result<u32, StopRequested>;

    /// Offers insurance up to `limit` (half the bet, capped at the
    /// balance). Returns `None` when declined.
    ///
    /// # Errors
    ///
    /// Returns [`StopRequested`] when the player asks to leave.
    fn insurance(&mut self, limit: u32) -> Result<Option<u32>, StopRequested>;

    /// Asks the player to pick one of `actions` for a hand at `score`.
    ///
    /// # Errors
    ///
    /// Returns [`StopRequested`] when the player asks to leave.
    fn action(&mut self, actions: &[Action], score: u8) -> Result<Action, StopRequested>;

    /// Renders a hand. `score` is `None` while a face-down card hides the
    /// true total; face-down cards are marked by [`Card::hidden`].
    ///
    /// [`Card::hidden`]: crate::card::Card::hidden
    fn show_hand(&mut self, hand: &Hand, score: Option<u8>, dealer: bool);

    /// Reports a game event: outcomes, notices, and the final summary.
    fn announce(&mut self, event: Event);
}
