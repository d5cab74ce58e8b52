//! Error types for game operations.

use thiserror::Error;

/// Errors from card collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// Draw attempted on an empty collection.
    #[error("no cards remain in the collection")]
    Empty,
    /// Indexed access or removal with an invalid index.
    #[error("card index {0} is out of range")]
    OutOfRange(usize),
}

/// Errors from bet validation.
///
/// These are always recovered by re-prompting; they never abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet must be greater than zero")]
    Zero,
    /// Bet amount exceeds what is available.
    #[error("bet exceeds the {limit} chips available")]
    TooLarge {
        /// The largest amount that would have been accepted.
        limit: u32,
    },
}

/// The player asked to leave the table.
///
/// Returned from prompt calls and propagated up through the round
/// controller, which exits the game loop cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("player requested to stop")]
pub struct StopRequested;

/// Errors that can end a round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The player asked to leave; handled by the game loop.
    #[error(transparent)]
    Stopped(#[from] StopRequested),
    /// The shoe or a hand ran dry mid-round. Unrecoverable: with correct
    /// reshuffle timing this indicates a deck-sizing bug.
    #[error(transparent)]
    Pile(#[from] PileError),
}
