use crate::card::Rank;
use crate::error::GameError;
use crate::result::{Event, HandPlay};
use crate::ui::Ui;

use super::{Game, HandSlot};

impl<U: Ui> Game<U> {
    /// Plays one full round: bet, deal, insurance check, player turn(s),
    /// dealer turn, settlement.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Stopped`] when the player leaves at a prompt,
    /// or [`GameError::Pile`] if the shoe runs dry mid-round.
    pub fn play_round(&mut self) -> Result<(), GameError> {
        let bet = self.collect_bet()?;
        self.deal_initial()?;
        self.show_dealer();

        // Insurance is on the table only while the up-card is an ace.
        if self.dealer.hand.get(1)?.rank() == Rank::Ace {
            let insurance = self.offer_insurance(bet)?;
            self.ui.announce(Event::CheckingDealerBlackjack);
            if self.dealer.hand.is_blackjack() {
                return self.settle_dealer_blackjack(bet, insurance);
            }
            self.ui.announce(Event::NoDealerBlackjack);
        }

        // Live hands carried into the dealer turn: (score, bet) per hand.
        let mut live: Vec<(u8, u32)> = Vec::new();

        match self.play_hand(HandSlot::Primary, bet, true)? {
            HandPlay::Blackjack => {
                self.pay_blackjack(bet);
                return Ok(());
            }
            HandPlay::Busted { bet } => {
                self.ui.announce(Event::PlayerBusted { bet });
                return Ok(());
            }
            HandPlay::Stood { score, bet } => live.push((score, bet)),
            HandPlay::Split => {
                self.player.place_bet(bet);
                self.split_hands()?;

                self.ui.announce(Event::FirstSplitHand);
                self.resolve_split_hand(HandSlot::Split, bet, &mut live)?;
                self.ui.announce(Event::SecondSplitHand);
                self.resolve_split_hand(HandSlot::Primary, bet, &mut live)?;
            }
        }

        if live.is_empty() {
            return Ok(());
        }

        match self.dealer_play()? {
            None => self.settle_dealer_bust(&live),
            Some(dealer_score) => self.settle(&live, dealer_score),
        }
        Ok(())
    }

    /// Plays one of the two hands formed by a split. Naturals and busts
    /// settle immediately; a stood hand joins the live list.
    fn resolve_split_hand(
        &mut self,
        slot: HandSlot,
        bet: u32,
        live: &mut Vec<(u8, u32)>,
    ) -> Result<(), GameError> {
        match self.play_hand(slot, bet, false)? {
            HandPlay::Blackjack => self.pay_blackjack(bet),
            HandPlay::Busted { bet } => self.ui.announce(Event::PlayerBusted { bet }),
            HandPlay::Stood { score, bet } => live.push((score, bet)),
            HandPlay::Split => unreachable!("splitting is never offered on a split hand"),
        }
        Ok(())
    }
}
