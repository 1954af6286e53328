//! The shoe cards are dealt from.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A shoe of one or more shuffled decks.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards still to be dealt. The next card dealt is the last one.
    cards: Vec<Card>,
    /// Number of decks the full shoe holds.
    decks: u8,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled shoe of `decks` decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(1, 42);
    /// assert_eq!(deck.remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            decks,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Creates a shoe that deals exactly `draws`, in order.
    ///
    /// Shuffling a stacked shoe rebuilds it as a single full deck.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            decks: 1,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Rebuilds the full shoe and shuffles it.
    pub fn shuffle(&mut self) {
        self.cards.clear();
        self.cards.reserve(self.total());

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }

        self.cards.shuffle(&mut self.rng);
        log::debug!("shuffled shoe of {} card(s)", self.cards.len());
    }

    /// Deals one card, removing it from the playable cards.
    ///
    /// Returns `None` when the shoe is empty.
    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards still to be dealt.
    #[must_use]
    pub fn playable_cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards in the full shoe.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns whether the shoe needs reshuffling based on penetration.
    ///
    /// Returns `true` if the fraction of the shoe already dealt has reached
    /// `penetration`. If penetration is 0, always returns `false`.
    #[must_use]
    pub fn needs_reshuffle(&self, penetration: f64) -> bool {
        if penetration == 0.0 || self.total() == 0 {
            return false;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (self.remaining() as f64 / self.total() as f64);

        used_ratio >= penetration
    }
}
