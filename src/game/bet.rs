use crate::error::GameError;
use crate::player::Player;
use crate::result::Event;
use crate::ui::Ui;

use super::Game;

impl<U: Ui> Game<U> {
    /// Collects and debits the main bet, re-prompting until it is valid.
    pub(super) fn collect_bet(&mut self) -> Result<u32, GameError> {
        let chips = self.player.chips();
        loop {
            let amount = self.ui.bet_amount(chips)?;
            match Player::validate_bet(amount, chips) {
                Ok(()) => {
                    self.player.place_bet(amount);
                    log::debug!("bet {amount} placed, {} chips left", self.player.chips());
                    return Ok(amount);
                }
                Err(err) => self.ui.announce(Event::InvalidBet(err)),
            }
        }
    }

    /// Clears both parties' hands and deals the opening cards: dealer hole
    /// card face-down, then player, dealer up-card, player.
    pub(super) fn deal_initial(&mut self) -> Result<(), GameError> {
        self.player.reset_hands();
        self.dealer.reset_hands();

        let card = self.shoe.draw()?;
        self.dealer.hand.add_hidden(card);
        let card = self.shoe.draw()?;
        self.player.hand.add(card);
        let card = self.shoe.draw()?;
        self.dealer.hand.add(card);
        let card = self.shoe.draw()?;
        self.player.hand.add(card);

        log::debug!("initial cards dealt, {} left in the shoe", self.shoe.len());
        Ok(())
    }
}
