use crate::error::GameError;
use crate::result::{Event, HandPlay};
use crate::ui::{Action, Ui};

use super::{Game, HandSlot};

impl<U: Ui> Game<U> {
    /// Plays out one of the player's hands.
    ///
    /// A two-card 21 at entry resolves as [`HandPlay::Blackjack`] before
    /// any action is offered. Otherwise the player acts while the score is
    /// below 21: hitting draws and continues, standing exits, doubling down
    /// draws exactly one card and forces a stand, and splitting returns
    /// [`HandPlay::Split`] for the round controller to handle.
    pub(super) fn play_hand(
        &mut self,
        slot: HandSlot,
        bet: u32,
        can_split: bool,
    ) -> Result<HandPlay, GameError> {
        let mut bet = bet;
        self.show_player(slot);

        if self.hand_mut(slot).score() == 21 {
            return Ok(HandPlay::Blackjack);
        }

        while self.hand_mut(slot).score() < 21 {
            let score = self.hand_mut(slot).score();
            let actions = self.legal_actions(slot, bet, can_split);
            let choice = self.ui.action(&actions, score)?;
            if !actions.contains(&choice) {
                continue;
            }

            match choice {
                Action::Hit => {
                    let card = self.shoe.draw()?;
                    self.hand_mut(slot).add(card);
                    self.show_player(slot);
                }
                Action::Stand => break,
                Action::DoubleDown => {
                    let card = self.shoe.draw()?;
                    self.hand_mut(slot).add(card);
                    self.ui.announce(Event::DoubleDown { bet });
                    self.player.place_bet(bet);
                    bet *= 2;
                    self.show_player(slot);
                    break;
                }
                Action::Split => return Ok(HandPlay::Split),
            }
        }

        let score = self.hand_mut(slot).score();
        if score > 21 {
            Ok(HandPlay::Busted { bet })
        } else {
            Ok(HandPlay::Stood { score, bet })
        }
    }

    /// The actions currently open to the player.
    ///
    /// Hit and Stand are always legal. Double down requires the remaining
    /// balance to cover a second stake; split additionally requires a pair
    /// and that no split has happened yet this round.
    fn legal_actions(&self, slot: HandSlot, bet: u32, can_split: bool) -> Vec<Action> {
        let mut actions = vec![Action::Hit, Action::Stand];
        let enough_chips = self.player.chips() >= bet;
        if enough_chips {
            actions.push(Action::DoubleDown);
        }
        if can_split && enough_chips && self.hand(slot).splitable() {
            actions.push(Action::Split);
        }
        actions
    }

    /// Re-forms the hands after a split: restores aces in the pair, moves
    /// its second card into the split hand, and draws one fresh card into
    /// each hand.
    pub(super) fn split_hands(&mut self) -> Result<(), GameError> {
        self.player.hand.restore_aces();
        let card = self.player.hand.take_split_card()?;
        self.player.split_hand.add(card);

        let card = self.shoe.draw()?;
        self.player.hand.add(card);
        let card = self.shoe.draw()?;
        self.player.split_hand.add(card);

        log::debug!("hand split, both hands redrawn to two cards");
        Ok(())
    }
}
