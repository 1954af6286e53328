//! Round result types for showdown.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::hand::HandValue;

/// Result of a single hand after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts, player has blackjack or a higher value).
    Win,
    /// Tie (equal values, or both player and dealer have blackjack).
    Tie,
    /// Player loses (player busts, dealer has blackjack or a higher value).
    Lose,
}

impl HandOutcome {
    /// Settles a player's final hand against the dealer's.
    ///
    /// A dealer blackjack beats everything but a player blackjack. Otherwise a
    /// bust player loses, a player blackjack wins, a dealer bust pays every
    /// standing hand, and the higher total wins.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{HandOutcome, HandValue};
    ///
    /// let player = HandValue { total: 19, ..HandValue::default() };
    /// let dealer = HandValue { total: 18, ..HandValue::default() };
    /// assert_eq!(HandOutcome::settle(player, dealer), HandOutcome::Win);
    /// ```
    #[must_use]
    pub fn settle(player: HandValue, dealer: HandValue) -> Self {
        if dealer.blackjack {
            if player.blackjack {
                Self::Tie
            } else {
                Self::Lose
            }
        } else if player.bust {
            Self::Lose
        } else if player.blackjack || dealer.bust {
            Self::Win
        } else {
            match player.total.cmp(&dealer.total) {
                core::cmp::Ordering::Greater => Self::Win,
                core::cmp::Ordering::Equal => Self::Tie,
                core::cmp::Ordering::Less => Self::Lose,
            }
        }
    }
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "wins",
            Self::Tie => "ties",
            Self::Lose => "loses",
        })
    }
}

/// Result for a single player seat after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// The seat index.
    pub seat: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The player's final hand.
    pub value: HandValue,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each seat, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand.
    pub dealer: HandValue,
}

impl RoundResult {
    /// Returns the number of seats with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: HandOutcome) -> usize {
        self.players
            .iter()
            .filter(|result| result.outcome == outcome)
            .count()
    }
}
