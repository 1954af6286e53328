//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Every suit, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Spades => "spades",
            Self::Clubs => "clubs",
        })
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
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
    /// Every rank, in deck-building order.
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

    /// Returns what a card of this rank contributes to a hand total.
    #[must_use]
    pub const fn value(self) -> CardValue {
        match self {
            Self::Two => CardValue::Fixed(2),
            Self::Three => CardValue::Fixed(3),
            Self::Four => CardValue::Fixed(4),
            Self::Five => CardValue::Fixed(5),
            Self::Six => CardValue::Fixed(6),
            Self::Seven => CardValue::Fixed(7),
            Self::Eight => CardValue::Fixed(8),
            Self::Nine => CardValue::Fixed(9),
            Self::Ten | Self::Jack | Self::Queen | Self::King => CardValue::Fixed(10),
            Self::Ace => CardValue::Alternatives(ACE_VALUES),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Six => "six",
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
            Self::Ace => "ace",
        })
    }
}

/// The two ways an ace can be counted.
pub const ACE_VALUES: [u8; 2] = [1, 11];

/// What a card contributes to a hand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardValue {
    /// A single value (2 through 10).
    Fixed(u8),
    /// One of several values, chosen per hand (an ace: 1 or 11).
    Alternatives([u8; 2]),
}

impl CardValue {
    /// Returns whether the value is chosen per hand rather than fixed.
    #[must_use]
    pub const fn is_alternative(self) -> bool {
        matches!(self, Self::Alternatives(_))
    }

    /// Returns the highest value this card can count as.
    #[must_use]
    pub const fn max(self) -> u8 {
        match self {
            Self::Fixed(value) => value,
            Self::Alternatives([low, high]) => {
                if low > high {
                    low
                } else {
                    high
                }
            }
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns what this card contributes to a hand total.
    #[must_use]
    pub const fn value(&self) -> CardValue {
        self.rank.value()
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
