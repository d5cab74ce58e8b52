//! Card, rank, and suit types.

use core::fmt;

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks, in deck order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// The rank's base blackjack value (face cards 10, ace 11).
    #[must_use]
    pub const fn base_value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Display symbol, e.g. `"Q"` or `"10"`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Rendering color associated with a suit. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuitColor {
    /// Diamonds and hearts.
    Red,
    /// Clubs and spades.
    Black,
}

/// Card suit. No gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Display symbol, e.g. `"♦"`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Hearts => "♥",
            Self::Spades => "♠",
        }
    }

    /// The suit's rendering color.
    #[must_use]
    pub const fn color(self) -> SuitColor {
        match self {
            Self::Diamonds | Self::Hearts => SuitColor::Red,
            Self::Clubs | Self::Spades => SuitColor::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// The card carries its current effective value: aces start at 11 and are
/// stepped down to 1 by hand scoring when the hand would otherwise bust.
/// The hidden flag marks the dealer's hole card and affects rendering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    value: u8,
    hidden: bool,
}

impl Card {
    /// Creates a face-up card valued at its rank's base value.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            value: rank.base_value(),
            hidden: false,
        }
    }

    /// The card's rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The card's suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Current effective value (1–11).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Whether the card is face-down.
    #[must_use]
    pub const fn hidden(&self) -> bool {
        self.hidden
    }

    /// Drops an ace from 11 to 1. No-op for non-aces or already-soft aces.
    pub const fn soften_ace(&mut self) {
        if matches!(self.rank, Rank::Ace) && self.value == 11 {
            self.value = 1;
        }
    }

    /// Restores an ace to 11. No-op for non-aces.
    pub const fn restore_ace(&mut self) {
        if matches!(self.rank, Rank::Ace) {
            self.value = 11;
        }
    }

    /// Turns the card face-down.
    pub const fn hide(&mut self) {
        self.hidden = true;
    }

    /// Turns the card face-up.
    pub const fn reveal(&mut self) {
        self.hidden = false;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
