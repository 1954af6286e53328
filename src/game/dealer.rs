use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{HandOutcome, PlayerResult, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the table's dealer hit policy.
    ///
    /// The dealer draws while [`TableOptions::dealer_hits`] holds: below 17,
    /// and on a soft 17 when `dealer_hits_soft_17` is set.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// [`TableOptions::dealer_hits`]: crate::TableOptions::dealer_hits
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.options.dealer_hits(&self.dealer) {
            let card = self.draw().ok_or(ShowdownError::NoCards)?;
            log::debug!("dealer hits {} and draws {card}", self.dealer.value());
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        log::debug!("dealer stands on {}", self.dealer.evaluate());
        self.state = GameState::RoundOver;

        Ok(drawn_cards)
    }

    /// Settles every seat against the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let dealer = self.dealer.evaluate();
        let players: Vec<PlayerResult> = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, hand)| {
                let value = hand.evaluate();
                let outcome = HandOutcome::settle(value, dealer);
                log::info!("seat {seat} {outcome} with {value} against dealer {dealer}");
                PlayerResult {
                    seat,
                    outcome,
                    value,
                }
            })
            .collect();

        Ok(RoundResult { players, dealer })
    }
}
