use crate::error::GameError;
use crate::player::Player;
use crate::result::Event;
use crate::ui::Ui;

use super::Game;

impl<U: Ui> Game<U> {
    /// Offers insurance while the dealer shows an ace.
    ///
    /// The stake is capped at half the main bet and at the remaining
    /// balance; when that cap is zero the offer is skipped entirely.
    /// Returns the debited insurance stake, or `None` if declined.
    pub(super) fn offer_insurance(&mut self, bet: u32) -> Result<Option<u32>, GameError> {
        let limit = (bet / 2).min(self.player.chips());
        if limit == 0 {
            return Ok(None);
        }

        loop {
            let Some(amount) = self.ui.insurance(limit)? else {
                return Ok(None);
            };
            match Player::validate_bet(amount, limit) {
                Ok(()) => {
                    self.player.place_bet(amount);
                    log::debug!("insurance bet {amount} placed");
                    return Ok(Some(amount));
                }
                Err(err) => self.ui.announce(Event::InvalidBet(err)),
            }
        }
    }

    /// Settles a dealer natural: reveals the hole card, pays 2:1 on any
    /// insurance stake, and ends the round. The main bet is lost.
    pub(super) fn settle_dealer_blackjack(
        &mut self,
        bet: u32,
        insurance: Option<u32>,
    ) -> Result<(), GameError> {
        self.dealer.hand.get_mut(0)?.reveal();
        self.show_dealer();

        if let Some(amount) = insurance {
            self.player.add_chips(amount * 2);
        }
        self.ui.announce(Event::DealerBlackjack { bet, insurance });
        Ok(())
    }
}
