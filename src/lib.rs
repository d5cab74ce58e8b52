//! A single-player console blackjack game and its rules engine.
//!
//! The library covers card and shoe modeling, hand scoring with soft-ace
//! resolution, chip bookkeeping, and the full round flow — deal, insurance,
//! player turns including split and double down, dealer turn, settlement.
//! Terminal rendering and prompting stay behind the [`Ui`] trait; the `cli`
//! feature ships a console front end built on it.
//!
//! # Example
//!
//! ```
//! use twentyone::{Card, Hand, Rank, Suit};
//!
//! let mut hand = Hand::new();
//! hand.add(Card::new(Rank::Ace, Suit::Spades));
//! hand.add(Card::new(Rank::King, Suit::Hearts));
//! assert_eq!(hand.score(), 21);
//! assert!(hand.is_blackjack());
//! ```

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod player;
pub mod result;
pub mod shoe;
pub mod ui;

// Re-export main types
pub use card::{Card, Rank, Suit, SuitColor};
pub use error::{BetError, GameError, PileError, StopRequested};
pub use game::Game;
pub use hand::Hand;
pub use options::GameOptions;
pub use pile::Pile;
pub use player::{Dealer, Player};
pub use result::{Event, HandPlay, Summary};
pub use shoe::{DECK_SIZE, Shoe};
pub use ui::{Action, Ui};
