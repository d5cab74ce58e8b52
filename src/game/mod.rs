//! Game engine and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{GameError, PileError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::{Dealer, Player};
use crate::result::{Event, Summary};
use crate::shoe::Shoe;
use crate::ui::Ui;

mod actions;
mod bet;
mod dealer;
mod insurance;
mod round;

/// Selects one of the player's hands without borrowing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandSlot {
    Primary,
    Split,
}

/// A blackjack game: the shoe, the accounts, and the round controller.
///
/// The game owns everything and drives itself against the attached [`Ui`]:
/// call [`Game::run`] for the full game loop, or [`Game::play_round`] for a
/// single round.
pub struct Game<U> {
    /// Game options.
    pub options: GameOptions,
    /// The shoe cards are dealt from.
    pub shoe: Shoe,
    /// The player's account and hands.
    pub player: Player,
    /// The dealer's hand.
    pub dealer: Dealer,
    /// The attached prompt/display collaborator.
    pub ui: U,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl<U: Ui> Game<U> {
    /// Creates a game with a freshly filled shoe.
    ///
    /// The seed makes shuffles reproducible; pass the current time for a
    /// casual game.
    ///
    /// ```no_run
    /// use twentyone::{Game, GameOptions};
    /// # struct Silent;
    /// # impl twentyone::Ui for Silent {
    /// #     fn bet_amount(&mut self, _: u32) -> Result<u32, twentyone::StopRequested> { Err(twentyone::StopRequested) }
    /// #     fn insurance(&mut self, _: u32) -> Result<Option<u32>, twentyone::StopRequested> { Ok(None) }
    /// #     fn action(&mut self, _: &[twentyone::Action], _: u8) -> Result<twentyone::Action, twentyone::StopRequested> { Err(twentyone::StopRequested) }
    /// #     fn show_hand(&mut self, _: &twentyone::Hand, _: Option<u8>, _: bool) {}
    /// #     fn announce(&mut self, _: twentyone::Event) {}
    /// # }
    ///
    /// let mut game = Game::new(GameOptions::default(), 42, Silent);
    /// let summary = game.run()?;
    /// # Ok::<(), twentyone::PileError>(())
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64, ui: U) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::new();
        shoe.refill(options.decks, &mut rng);

        Self {
            options,
            shoe,
            player: Player::new(options.starting_chips),
            dealer: Dealer::new(),
            ui,
            rng,
        }
    }

    /// Plays rounds until the player stops, runs out of chips, or the shoe
    /// breaks an invariant.
    ///
    /// Returns the final tally, which is also announced to the UI as
    /// [`Event::GameOver`].
    ///
    /// # Errors
    ///
    /// Returns [`PileError`] if a draw fails mid-round. That never happens
    /// with correct reshuffle timing and is not recoverable.
    pub fn run(&mut self) -> Result<Summary, PileError> {
        let starting_chips = self.player.chips();

        loop {
            match self.play_round() {
                Ok(()) => {}
                Err(GameError::Stopped(_)) => break,
                Err(GameError::Pile(err)) => return Err(err),
            }

            if self.player.chips() == 0 {
                self.ui.announce(Event::OutOfChips);
                break;
            }

            if self.shoe.len() <= self.options.reshuffle_at {
                log::info!("reshuffling shoe ({} cards left)", self.shoe.len());
                self.shoe.refill(self.options.decks, &mut self.rng);
                self.ui.announce(Event::Reshuffled);
            }
        }

        let summary = Summary {
            starting_chips,
            final_chips: self.player.chips(),
        };
        self.ui.announce(Event::GameOver(summary));
        Ok(summary)
    }

    fn hand(&self, slot: HandSlot) -> &Hand {
        match slot {
            HandSlot::Primary => &self.player.hand,
            HandSlot::Split => &self.player.split_hand,
        }
    }

    fn hand_mut(&mut self, slot: HandSlot) -> &mut Hand {
        match slot {
            HandSlot::Primary => &mut self.player.hand,
            HandSlot::Split => &mut self.player.split_hand,
        }
    }

    /// Shows one of the player's hands with its score.
    fn show_player(&mut self, slot: HandSlot) {
        let hand = match slot {
            HandSlot::Primary => &mut self.player.hand,
            HandSlot::Split => &mut self.player.split_hand,
        };
        let score = hand.score();
        self.ui.show_hand(&*hand, Some(score), false);
    }

    /// Shows the dealer's hand. The score stays hidden while the hole card
    /// is face-down.
    fn show_dealer(&mut self) {
        let hand = &mut self.dealer.hand;
        let score = if hand.has_hidden() {
            None
        } else {
            Some(hand.score())
        };
        self.ui.show_hand(&self.dealer.hand, score, true);
    }
}
