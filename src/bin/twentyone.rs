//! Console blackjack front end.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use colored::Colorize;
use dialoguer::{Input, Select};

use twentyone::{
    Action, Card, Event, Game, GameOptions, Hand, Player, StopRequested, Summary, SuitColor, Ui,
};

/// Inputs accepted at betting prompts to leave the table.
const STOP_WORDS: [&str; 4] = ["s", "stop", "exit", "quit"];

#[derive(Debug, Parser)]
#[command(name = "twentyone", about = "Play blackjack against the dealer.")]
struct Args {
    /// Number of decks in the shoe.
    #[arg(long, default_value_t = 2)]
    decks: u8,

    /// Starting chip balance.
    #[arg(long, default_value_t = 100)]
    chips: u32,

    /// The dealer stands at this score or higher.
    #[arg(long, default_value_t = 17)]
    dealer_stands_on: u8,

    /// Refill the shoe between rounds once this many cards remain.
    #[arg(long, default_value_t = 15)]
    reshuffle_at: usize,

    /// Shuffle seed; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = GameOptions::default()
        .with_decks(args.decks)
        .with_starting_chips(args.chips)
        .with_dealer_stands_on(args.dealer_stands_on)
        .with_reshuffle_at(args.reshuffle_at);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    println!(
        "Welcome to the blackjack table. The dealer stands on {}.",
        options.dealer_stands_on
    );
    println!("Type 'stop' at any betting prompt to leave.\n");

    let mut game = Game::new(options, seed, Console);
    if let Err(err) = game.run() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}

/// The interactive prompt/display collaborator.
struct Console;

impl Ui for Console {
    fn bet_amount(&mut self, chips: u32) -> Result<u32, StopRequested> {
        read_amount(&format!("Your bet ({chips} chips available)"), chips)
    }

    fn insurance(&mut self, limit: u32) -> Result<Option<u32>, StopRequested> {
        let Ok(selection) = Select::new()
            .with_prompt("The dealer shows an ace. Take insurance?")
            .items(&["Yes", "No"])
            .default(1)
            .interact()
        else {
            return Err(StopRequested);
        };
        if selection != 0 {
            return Ok(None);
        }
        read_amount(&format!("Insurance bet (up to {limit})"), limit).map(Some)
    }

    fn action(&mut self, actions: &[Action], score: u8) -> Result<Action, StopRequested> {
        let labels: Vec<String> = actions.iter().map(ToString::to_string).collect();
        let Ok(selection) = Select::new()
            .with_prompt(format!("Your score is {score}. What will you do?"))
            .items(&labels)
            .default(0)
            .interact()
        else {
            return Err(StopRequested);
        };
        Ok(actions[selection])
    }

    fn show_hand(&mut self, hand: &Hand, score: Option<u8>, dealer: bool) {
        let title = if dealer { "Dealer's cards:" } else { "Your cards:" };
        let cards = hand
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("  ");
        println!("\n{title} {cards}");
        match score {
            Some(score) => println!("Score: {score}"),
            None => println!(),
        }
    }

    fn announce(&mut self, event: Event) {
        match event {
            Event::Reshuffled => {
                println!("{}", "The shoe runs low. Reshuffling.".yellow());
            }
            Event::CheckingDealerBlackjack => println!("Checking for dealer blackjack..."),
            Event::NoDealerBlackjack => println!("No dealer blackjack."),
            Event::DealerBlackjack { bet, insurance } => match insurance {
                Some(amount) => println!(
                    "{}",
                    format!(
                        "Dealer has blackjack. You lose your {bet} chip bet \
                         but collect {} from insurance.",
                        amount * 2
                    )
                    .red()
                ),
                None => {
                    println!(
                        "{}",
                        format!("Dealer has blackjack. You lose your {bet} chip bet.").red()
                    );
                }
            },
            Event::PlayerBlackjack { winnings } => {
                println!("{}", format!("Blackjack! You win {winnings} chips.").green().bold());
            }
            Event::PlayerBusted { bet } => {
                println!("{}", format!("Busted. You lose {bet} chips.").red());
            }
            Event::DealerBusted { bet } => {
                println!("{}", format!("Dealer busted! You win {bet} chips.").green());
            }
            Event::PlayerWon {
                player_score,
                dealer_score,
                bet,
            } => println!(
                "{}",
                format!("You win {bet} chips ({player_score} against {dealer_score}).").green()
            ),
            Event::DealerWon {
                player_score,
                dealer_score,
                bet,
            } => println!(
                "{}",
                format!("Dealer wins ({dealer_score} against {player_score}). You lose {bet} chips.")
                    .red()
            ),
            Event::Push { score, bet } => {
                println!("Push at {score}. Your {bet} chips are returned.");
            }
            Event::DoubleDown { bet } => {
                println!("You double down for another {bet} chips.");
            }
            Event::FirstSplitHand => println!("{}", "Playing the split hand first.".bold()),
            Event::SecondSplitHand => println!("{}", "Back to the original hand.".bold()),
            Event::InvalidBet(err) => println!("{}", err.to_string().red()),
            Event::OutOfChips => println!("{}", "You are out of chips.".red().bold()),
            Event::GameOver(summary) => announce_game_over(summary),
        }
    }
}

fn announce_game_over(summary: Summary) {
    let net = summary.net();
    if net > 0 {
        println!(
            "{}",
            format!(
                "You leave the table with {} chips, up {net}. Well played.",
                summary.final_chips
            )
            .green()
            .bold()
        );
    } else if net < 0 {
        println!(
            "{}",
            format!(
                "You leave the table with {} chips, down {}.",
                summary.final_chips,
                -net
            )
            .red()
        );
    } else {
        println!(
            "You leave the table with {} chips, exactly what you came with.",
            summary.final_chips
        );
    }
}

/// Prompts for a chip amount within `1..=limit`. Stop words raise
/// [`StopRequested`], as does a closed input stream.
fn read_amount(prompt: &str, limit: u32) -> Result<u32, StopRequested> {
    let Ok(input) = Input::<String>::new()
        .with_prompt(format!("{prompt}, or 'stop' to leave"))
        .validate_with(|raw: &String| -> Result<(), String> {
            let raw = raw.trim().to_lowercase();
            if STOP_WORDS.contains(&raw.as_str()) {
                return Ok(());
            }
            let amount: u32 = raw
                .parse()
                .map_err(|_| "enter a whole number".to_string())?;
            Player::validate_bet(amount, limit).map_err(|err| err.to_string())
        })
        .interact()
    else {
        return Err(StopRequested);
    };

    let input = input.trim().to_lowercase();
    if STOP_WORDS.contains(&input.as_str()) {
        return Err(StopRequested);
    }
    Ok(input.parse().expect("validated by the prompt"))
}

fn render_card(card: &Card) -> String {
    if card.hidden() {
        return "[??]".dimmed().to_string();
    }
    let text = format!("[{card}]");
    match card.suit().color() {
        SuitColor::Red => text.red().to_string(),
        SuitColor::Black => text.normal().to_string(),
    }
}
