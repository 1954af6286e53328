//! Table configuration options and hit policies.

use crate::hand::Hand;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_players(3)
///     .with_dealer_hits_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Number of player seats.
    pub players: u8,
    /// Players hit while their hand is below this value.
    pub player_hit_below: u16,
    /// The dealer hits while their hand is below this value.
    pub dealer_hit_below: u16,
    /// Whether a soft dealer hand also hits at exactly `dealer_hit_below`.
    pub dealer_hits_soft_17: bool,
    /// Deck penetration (fraction of the shoe played before reshuffle).
    /// 0 to disable reshuffling.
    pub penetration: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            players: 2,
            player_hit_below: 14,
            dealer_hit_below: 17,
            dealer_hits_soft_17: true,
            penetration: 0.0,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of player seats.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_players(5);
    /// assert_eq!(options.players, 5);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the value players stop hitting at.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_player_hit_below(17);
    /// assert_eq!(options.player_hit_below, 17);
    /// ```
    #[must_use]
    pub const fn with_player_hit_below(mut self, value: u16) -> Self {
        self.player_hit_below = value;
        self
    }

    /// Sets the value the dealer stops hitting at.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_hit_below(16);
    /// assert_eq!(options.dealer_hit_below, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_hit_below(mut self, value: u16) -> Self {
        self.dealer_hit_below = value;
        self
    }

    /// Sets whether the dealer hits a soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_hits_soft_17(false);
    /// assert_eq!(options.dealer_hits_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::TableOptions;
    ///
    /// let options = TableOptions::default().with_penetration(0.75);
    /// assert_eq!(options.penetration, 0.75);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Returns whether a player holding `hand` takes another card.
    #[must_use]
    pub fn player_hits(&self, hand: &Hand) -> bool {
        hand.value() < self.player_hit_below
    }

    /// Returns whether the dealer holding `hand` takes another card.
    ///
    /// With `dealer_hits_soft_17` set, a soft hand (any ace held) hits up to
    /// and including `dealer_hit_below`.
    #[must_use]
    pub fn dealer_hits(&self, hand: &Hand) -> bool {
        let value = hand.value();
        if self.dealer_hits_soft_17 && hand.is_soft() {
            value <= self.dealer_hit_below
        } else {
            value < self.dealer_hit_below
        }
    }
}
