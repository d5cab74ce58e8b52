//! Game integration tests.

use std::collections::{HashMap, HashSet, VecDeque};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twentyone::{
    Action, BetError, Card, DECK_SIZE, Event, Game, GameOptions, Hand, Pile, PileError, Player,
    Rank, Shoe, StopRequested, Suit, Ui,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// A scripted stand-in for the console: canned bets and actions in, events
/// and offered action lists out. An exhausted bet script raises the stop
/// signal, which lets `run` wind down naturally.
#[derive(Default)]
struct Script {
    bets: VecDeque<u32>,
    insurance_bets: VecDeque<Option<u32>>,
    actions: VecDeque<Action>,
    offered: Vec<Vec<Action>>,
    events: Vec<Event>,
}

impl Ui for Script {
    fn bet_amount(&mut self, _chips: u32) -> Result<u32, StopRequested> {
        self.bets.pop_front().ok_or(StopRequested)
    }

    fn insurance(&mut self, _limit: u32) -> Result<Option<u32>, StopRequested> {
        Ok(self.insurance_bets.pop_front().unwrap_or(None))
    }

    fn action(&mut self, actions: &[Action], _score: u8) -> Result<Action, StopRequested> {
        self.offered.push(actions.to_vec());
        Ok(self
            .actions
            .pop_front()
            .expect("script ran out of player actions"))
    }

    fn show_hand(&mut self, _hand: &Hand, _score: Option<u8>, _dealer: bool) {}

    fn announce(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// Builds a game with a stacked shoe. Draws come off the front of `draws`,
/// in deal order: dealer hole card, player, dealer up-card, player, then
/// every subsequent hit.
fn scripted_game(options: GameOptions, bets: &[u32], actions: &[Action], draws: &[Card]) -> Game<Script> {
    let mut script = Script::default();
    script.bets.extend(bets.iter().copied());
    script.actions.extend(actions.iter().copied());

    let mut game = Game::new(options, 1, script);
    game.shoe.load(draws.iter().copied());
    game
}

#[test]
fn hand_scoring_softens_aces_one_at_a_time() {
    let mut hand = Hand::new();
    hand.add(card(Rank::Ace, Suit::Hearts));
    hand.add(card(Rank::Ace, Suit::Spades));
    assert_eq!(hand.score(), 12);

    let mut hand = Hand::new();
    hand.add(card(Rank::Ace, Suit::Hearts));
    hand.add(card(Rank::King, Suit::Spades));
    assert_eq!(hand.score(), 21);
    assert!(hand.is_blackjack());

    let mut hand = Hand::new();
    hand.add(card(Rank::Ace, Suit::Hearts));
    hand.add(card(Rank::Ace, Suit::Spades));
    hand.add(card(Rank::Nine, Suit::Clubs));
    assert_eq!(hand.score(), 21);

    let mut hand = Hand::new();
    hand.add(card(Rank::Ace, Suit::Hearts));
    hand.add(card(Rank::Ace, Suit::Spades));
    hand.add(card(Rank::Ace, Suit::Clubs));
    assert_eq!(hand.score(), 13);

    let mut hand = Hand::new();
    hand.add(card(Rank::Ten, Suit::Hearts));
    hand.add(card(Rank::Ten, Suit::Spades));
    hand.add(card(Rank::Two, Suit::Clubs));
    assert_eq!(hand.score(), 22);
    assert!(hand.is_busted());
}

#[test]
fn hand_restores_aces_after_softening() {
    let mut hand = Hand::new();
    hand.add(card(Rank::Ace, Suit::Hearts));
    hand.add(card(Rank::Nine, Suit::Spades));
    hand.add(card(Rank::Five, Suit::Clubs));
    assert_eq!(hand.score(), 15);
    assert_eq!(hand.get(0).unwrap().value(), 1);

    hand.restore_aces();
    assert_eq!(hand.get(0).unwrap().value(), 11);
    // Scoring softens it again since the hand still totals over 21.
    assert_eq!(hand.score(), 15);
}

#[test]
fn hand_split_eligibility() {
    let mut hand = Hand::new();
    hand.add(card(Rank::Eight, Suit::Clubs));
    hand.add(card(Rank::Eight, Suit::Diamonds));
    assert!(hand.splitable());

    let mut hand = Hand::new();
    hand.add(card(Rank::Eight, Suit::Clubs));
    hand.add(card(Rank::Nine, Suit::Diamonds));
    assert!(!hand.splitable());

    let mut hand = Hand::new();
    hand.add(card(Rank::Eight, Suit::Clubs));
    hand.add(card(Rank::Eight, Suit::Diamonds));
    hand.add(card(Rank::Two, Suit::Spades));
    assert!(!hand.splitable());
}

#[test]
fn pile_draws_from_front_and_reports_errors() {
    let mut pile = Pile::new();
    assert_eq!(pile.draw().unwrap_err(), PileError::Empty);

    pile.push(card(Rank::Two, Suit::Clubs));
    pile.push(card(Rank::Three, Suit::Clubs));
    assert_eq!(pile.draw().unwrap().rank(), Rank::Two);
    assert_eq!(pile.get(5).unwrap_err(), PileError::OutOfRange(5));
    assert_eq!(pile.remove(3).unwrap_err(), PileError::OutOfRange(3));

    pile.push_hidden(card(Rank::Four, Suit::Hearts));
    assert!(pile.get(1).unwrap().hidden());

    let mut hand = Hand::new();
    hand.add(card(Rank::Eight, Suit::Clubs));
    assert_eq!(hand.take_split_card().unwrap_err(), PileError::OutOfRange(1));
}

#[test]
fn shoe_refill_builds_complete_decks() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut shoe = Shoe::new();

    shoe.refill(1, &mut rng);
    assert_eq!(shoe.len(), DECK_SIZE);
    let unique: HashSet<(Rank, Suit)> = shoe.iter().map(|c| (c.rank(), c.suit())).collect();
    assert_eq!(unique.len(), DECK_SIZE);

    shoe.refill(6, &mut rng);
    assert_eq!(shoe.len(), 6 * DECK_SIZE);
    let mut counts: HashMap<(Rank, Suit), usize> = HashMap::new();
    for c in shoe.iter() {
        *counts.entry((c.rank(), c.suit())).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&n| n == 6));
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(6)
        .with_dealer_stands_on(18)
        .with_reshuffle_at(30)
        .with_starting_chips(500);

    assert_eq!(options.decks, 6);
    assert_eq!(options.dealer_stands_on, 18);
    assert_eq!(options.reshuffle_at, 30);
    assert_eq!(options.starting_chips, 500);
}

#[test]
fn bet_validation_bounds() {
    assert_eq!(Player::validate_bet(0, 100).unwrap_err(), BetError::Zero);
    assert_eq!(
        Player::validate_bet(101, 100).unwrap_err(),
        BetError::TooLarge { limit: 100 }
    );
    assert!(Player::validate_bet(100, 100).is_ok());
    assert!(Player::validate_bet(1, 100).is_ok());
}

#[test]
fn round_player_outscores_dealer() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[10],
        &[Action::Stand],
        &[
            card(Rank::Eight, Suit::Hearts), // dealer hole
            card(Rank::Ten, Suit::Clubs),    // player
            card(Rank::Ten, Suit::Hearts),   // dealer up-card
            card(Rank::Queen, Suit::Clubs),  // player
        ],
    );

    game.play_round().unwrap();

    assert_eq!(game.player.chips(), 110);
    assert!(game.ui.events.contains(&Event::PlayerWon {
        player_score: 20,
        dealer_score: 18,
        bet: 10,
    }));
    // The hole card was revealed for the dealer turn.
    assert!(!game.dealer.hand.get(0).unwrap().hidden());
}

#[test]
fn round_push_returns_the_bet() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[10],
        &[Action::Stand],
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Eight, Suit::Clubs),
        ],
    );

    game.play_round().unwrap();

    assert_eq!(game.player.chips(), 100);
    assert!(game.ui.events.contains(&Event::Push { score: 18, bet: 10 }));
}

#[test]
fn round_player_bust_skips_dealer_turn() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[10],
        &[Action::Hit],
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Five, Suit::Spades), // hit: 19 -> 24
        ],
    );

    game.play_round().unwrap();

    assert_eq!(game.player.chips(), 90);
    assert!(game.ui.events.contains(&Event::PlayerBusted { bet: 10 }));
    // Dealer never played: the hole card is still face-down.
    assert!(game.dealer.hand.get(0).unwrap().hidden());
    assert_eq!(game.dealer.hand.len(), 2);
}

#[test]
fn round_dealer_bust_pays_live_hands() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[10],
        &[Action::Stand],
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Six, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Six, Suit::Spades), // dealer: 16 -> 22
        ],
    );

    game.play_round().unwrap();

    assert_eq!(game.player.chips(), 110);
    assert!(game.ui.events.contains(&Event::DealerBusted { bet: 10 }));
}

#[test]
fn double_down_doubles_bet_and_forces_stand() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[10],
        &[Action::DoubleDown],
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Nine, Suit::Spades), // the one doubled-down card
        ],
    );

    game.play_round().unwrap();

    // 100 - 10 - 10 + 40: the doubled stake won back twice over.
    assert_eq!(game.player.chips(), 120);
    assert!(game.ui.events.contains(&Event::DoubleDown { bet: 10 }));
    assert!(game.ui.events.contains(&Event::PlayerWon {
        player_score: 20,
        dealer_score: 17,
        bet: 20,
    }));
    // The stand was forced: no second action prompt.
    assert!(game.ui.actions.is_empty());
    assert_eq!(game.ui.offered.len(), 1);
}

#[test]
fn double_down_requires_chips_for_a_second_stake() {
    let mut game = scripted_game(
        GameOptions::default().with_starting_chips(10),
        &[10],
        &[Action::Stand],
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Five, Suit::Clubs),
        ],
    );

    game.play_round().unwrap();

    assert_eq!(game.ui.offered[0], vec![Action::Hit, Action::Stand]);
    assert_eq!(game.player.chips(), 0);
}

#[test]
fn split_plays_both_hands_and_is_offered_once() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[10],
        &[Action::Split, Action::Hit, Action::Stand, Action::Hit],
        &[
            card(Rank::Ten, Suit::Hearts),    // dealer hole
            card(Rank::Eight, Suit::Clubs),   // player
            card(Rank::Nine, Suit::Hearts),   // dealer up-card: 19
            card(Rank::Eight, Suit::Diamonds), // player: the pair
            card(Rank::Three, Suit::Spades),  // drawn to the original hand
            card(Rank::Two, Suit::Spades),    // drawn to the split hand
            card(Rank::Queen, Suit::Clubs),   // split hand hit: 10 -> 20
            card(Rank::King, Suit::Clubs),    // original hand hit: 11 -> 21
        ],
    );

    game.play_round().unwrap();

    // Two stakes of 10, both hands beat the dealer's 19.
    assert_eq!(game.player.chips(), 120);
    assert!(game.ui.events.contains(&Event::PlayerWon {
        player_score: 20,
        dealer_score: 19,
        bet: 10,
    }));
    assert!(game.ui.events.contains(&Event::PlayerWon {
        player_score: 21,
        dealer_score: 19,
        bet: 10,
    }));

    // The split hand is played before the original hand.
    let first = game
        .ui
        .events
        .iter()
        .position(|e| *e == Event::FirstSplitHand)
        .unwrap();
    let second = game
        .ui
        .events
        .iter()
        .position(|e| *e == Event::SecondSplitHand)
        .unwrap();
    assert!(first < second);

    // Split appears in the first action list and never again.
    assert!(game.ui.offered[0].contains(&Action::Split));
    assert!(game.ui.offered[1..].iter().all(|a| !a.contains(&Action::Split)));
}

#[test]
fn insurance_pays_double_on_dealer_blackjack() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[10],
        &[],
        &[
            card(Rank::Ten, Suit::Hearts), // dealer hole
            card(Rank::Five, Suit::Clubs),
            card(Rank::Ace, Suit::Hearts), // dealer up-card
            card(Rank::Six, Suit::Clubs),
        ],
    );
    game.ui.insurance_bets.push_back(Some(5));

    game.play_round().unwrap();

    // 100 - 10 (bet, lost) - 5 (insurance) + 10 (insurance pays 2:1).
    assert_eq!(game.player.chips(), 95);
    assert!(game.ui.events.contains(&Event::CheckingDealerBlackjack));
    assert!(game.ui.events.contains(&Event::DealerBlackjack {
        bet: 10,
        insurance: Some(5),
    }));
    assert!(!game.dealer.hand.get(0).unwrap().hidden());
}

#[test]
fn declined_insurance_and_no_dealer_blackjack_continues_the_round() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[10],
        &[Action::Hit],
        &[
            card(Rank::Seven, Suit::Hearts), // dealer hole: soft 18 with the ace
            card(Rank::Five, Suit::Clubs),
            card(Rank::Ace, Suit::Hearts), // dealer up-card
            card(Rank::Six, Suit::Clubs),
            card(Rank::King, Suit::Spades), // player hit: 11 -> 21
        ],
    );
    game.ui.insurance_bets.push_back(None);

    game.play_round().unwrap();

    assert_eq!(game.player.chips(), 110);
    assert!(game.ui.events.contains(&Event::NoDealerBlackjack));
    assert!(game.ui.events.contains(&Event::PlayerWon {
        player_score: 21,
        dealer_score: 18,
        bet: 10,
    }));
}

#[test]
fn natural_blackjack_pays_two_and_a_half_times() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[10],
        &[],
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::King, Suit::Clubs),
        ],
    );

    game.play_round().unwrap();

    assert_eq!(game.player.chips(), 115);
    assert!(game.ui.events.contains(&Event::PlayerBlackjack { winnings: 15 }));
    // The round ended before the dealer turn.
    assert!(game.dealer.hand.get(0).unwrap().hidden());
}

#[test]
fn invalid_bets_are_reprompted() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[0, 500, 10],
        &[Action::Stand],
        &[
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Queen, Suit::Clubs),
        ],
    );

    game.play_round().unwrap();

    assert!(game.ui.events.contains(&Event::InvalidBet(BetError::Zero)));
    assert!(game
        .ui
        .events
        .contains(&Event::InvalidBet(BetError::TooLarge { limit: 100 })));
    assert_eq!(game.player.chips(), 110);
}

#[test]
fn stop_at_the_betting_prompt_ends_the_game() {
    let mut game = scripted_game(GameOptions::default(), &[], &[], &[]);
    // The shoe was replaced with an empty one, but no round is ever dealt.

    let summary = game.run().unwrap();

    assert_eq!(summary.starting_chips, 100);
    assert_eq!(summary.final_chips, 100);
    assert_eq!(summary.net(), 0);
    assert_eq!(game.ui.events, vec![Event::GameOver(summary)]);
}

#[test]
fn losing_every_chip_ends_the_game() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[100],
        &[Action::Stand],
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Diamonds),
            card(Rank::Eight, Suit::Clubs),
        ],
    );

    let summary = game.run().unwrap();

    assert_eq!(summary.net(), -100);
    assert!(game.ui.events.contains(&Event::OutOfChips));
    assert!(game.ui.events.contains(&Event::GameOver(summary)));
}

#[test]
fn shoe_reshuffles_between_rounds() {
    let mut game = scripted_game(
        GameOptions::default(),
        &[10],
        &[Action::Stand],
        &[
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Queen, Suit::Clubs),
        ],
    );

    let summary = game.run().unwrap();

    // The emptied shoe was refilled before the next betting prompt.
    assert!(game.ui.events.contains(&Event::Reshuffled));
    assert_eq!(game.shoe.len(), 2 * DECK_SIZE);
    assert_eq!(summary.net(), 10);
}

#[test]
fn dealer_stand_threshold_is_configurable() {
    let mut game = scripted_game(
        GameOptions::default().with_dealer_stands_on(18),
        &[10],
        &[Action::Stand],
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Seven, Suit::Hearts), // dealer 17: must draw at 18
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Four, Suit::Spades), // dealer: 17 -> 21
        ],
    );

    game.play_round().unwrap();

    assert_eq!(game.player.chips(), 90);
    assert!(game.ui.events.contains(&Event::DealerWon {
        player_score: 19,
        dealer_score: 21,
        bet: 10,
    }));
}
