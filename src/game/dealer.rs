use crate::error::GameError;
use crate::result::Event;
use crate::ui::Ui;

use super::Game;

impl<U: Ui> Game<U> {
    /// Plays out the dealer's hand.
    ///
    /// Reveals the hole card, then draws until the score reaches the
    /// configured stand threshold. Returns the final score, or `None` if
    /// the dealer busted.
    pub(super) fn dealer_play(&mut self) -> Result<Option<u8>, GameError> {
        self.dealer.hand.get_mut(0)?.reveal();
        self.show_dealer();

        while self.dealer.hand.score() < self.options.dealer_stands_on {
            let card = self.shoe.draw()?;
            self.dealer.hand.add(card);
            self.show_dealer();
        }

        let score = self.dealer.hand.score();
        Ok((score <= 21).then_some(score))
    }

    /// Pays a natural blackjack: the stake back plus one-and-a-half times
    /// the bet, floored.
    pub(super) fn pay_blackjack(&mut self, bet: u32) {
        let winnings = bet * 3 / 2;
        self.player.add_chips(bet + winnings);
        self.ui.announce(Event::PlayerBlackjack { winnings });
    }

    /// Pays every live hand double its stake after a dealer bust.
    pub(super) fn settle_dealer_bust(&mut self, hands: &[(u8, u32)]) {
        let bet: u32 = hands.iter().map(|&(_, bet)| bet).sum();
        self.player.add_chips(bet * 2);
        self.ui.announce(Event::DealerBusted { bet });
    }

    /// Compares each live hand against the dealer's score and settles it:
    /// a win pays double the stake, a push returns it, a loss pays nothing.
    pub(super) fn settle(&mut self, hands: &[(u8, u32)], dealer_score: u8) {
        for &(player_score, bet) in hands {
            if player_score > dealer_score {
                self.player.add_chips(bet * 2);
                self.ui.announce(Event::PlayerWon {
                    player_score,
                    dealer_score,
                    bet,
                });
            } else if player_score < dealer_score {
                self.ui.announce(Event::DealerWon {
                    player_score,
                    dealer_score,
                    bet,
                });
            } else {
                self.player.add_chips(bet);
                self.ui.announce(Event::Push {
                    score: player_score,
                    bet,
                });
            }
        }
    }
}
