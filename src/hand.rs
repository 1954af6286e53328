//! Hand representation and value evaluation.

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, CardValue};

/// The best possible hand total.
pub const BLACKJACK: u16 = 21;

/// Returns every total the cards can add up to.
///
/// Totals are folded left to right starting from `{0}`. A fixed card adds its
/// value to every running total; an ace branches each running total once per
/// alternative value. Duplicate totals collapse, so the set holds at most
/// `aces + 1` entries.
///
/// # Example
///
/// ```
/// use bjsim::{Card, Rank, Suit, possible_totals};
///
/// let cards = [
///     Card::new(Suit::Clubs, Rank::Ace),
///     Card::new(Suit::Spades, Rank::Ace),
/// ];
/// let totals: Vec<u16> = possible_totals(&cards).into_iter().collect();
/// assert_eq!(totals, [2, 12, 22]);
/// ```
#[must_use]
pub fn possible_totals(cards: &[Card]) -> BTreeSet<u16> {
    let mut totals = BTreeSet::from([0_u16]);

    for card in cards {
        totals = match card.value() {
            CardValue::Fixed(value) => totals
                .into_iter()
                .map(|total| total.saturating_add(u16::from(value)))
                .collect(),
            CardValue::Alternatives(values) => values
                .iter()
                .flat_map(|&value| {
                    totals
                        .iter()
                        .map(move |&total| total.saturating_add(u16::from(value)))
                })
                .collect(),
        };
    }

    totals
}

/// Returns the best total for the cards.
///
/// This is the largest total not above 21, or the smallest total when every
/// way of counting the aces busts.
#[must_use]
pub fn best_total(cards: &[Card]) -> u16 {
    let totals = possible_totals(cards);
    totals
        .range(..=BLACKJACK)
        .next_back()
        .or_else(|| totals.first())
        .copied()
        .unwrap_or(0)
}

/// Returns whether any card can be counted more than one way.
///
/// This reports the presence of an ace, not whether the best total counts one
/// as 11: four aces and a ten total 14 with every ace low and are still soft.
#[must_use]
pub fn has_alternative(cards: &[Card]) -> bool {
    cards.iter().any(|card| card.value().is_alternative())
}

/// A snapshot of everything the evaluator reports about a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HandValue {
    /// Best total.
    pub total: u16,
    /// Whether the hand holds an ace.
    pub soft: bool,
    /// Whether the best total is over 21.
    pub bust: bool,
    /// Whether the hand is a natural (21 in two cards).
    pub blackjack: bool,
}

impl HandValue {
    /// Evaluates the cards.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let total = best_total(cards);
        Self {
            total,
            soft: has_alternative(cards),
            bust: total > BLACKJACK,
            blackjack: total == BLACKJACK && cards.len() == 2,
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.blackjack {
            f.write_str("blackjack")
        } else if self.bust {
            write!(f, "bust {}", self.total)
        } else if self.soft {
            write!(f, "soft {}", self.total)
        } else {
            write!(f, "{}", self.total)
        }
    }
}

/// A hand of cards.
///
/// A hand only grows: cards are dealt onto it and it is cleared as a whole at
/// the end of a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in dealing order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 where that does not bust the hand, otherwise as 1.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ten));
    /// hand.add_card(Card::new(Suit::Clubs, Rank::Ace));
    /// assert_eq!(hand.value(), 21);
    /// assert!(hand.is_blackjack());
    /// ```
    #[must_use]
    pub fn value(&self) -> u16 {
        best_total(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        has_alternative(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Evaluates the hand in a single pass.
    #[must_use]
    pub fn evaluate(&self) -> HandValue {
        HandValue::of(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
