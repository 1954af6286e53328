use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, DealError};

use super::{Game, GameState};

impl Game {
    /// Deals two cards to every seat and the dealer.
    ///
    /// Cards go one at a time to each seat in order, then the dealer, twice
    /// round. If the dealer has blackjack, or every seat does, the round ends
    /// immediately and no one plays.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal, the table has
    /// no seats, or the shoe cannot cover the deal.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }

        if self.players.is_empty() {
            return Err(DealError::NoPlayers);
        }

        if self.deck.remaining() < (self.players.len() + 1) * 2 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            for (seat, hand) in self.players.iter_mut().enumerate() {
                let card = self.deck.deal_card().ok_or(DealError::NotEnoughCards)?;
                log::debug!("seat {seat} dealt {card}");
                hand.add_card(card);
            }
            let card = self.deck.deal_card().ok_or(DealError::NotEnoughCards)?;
            log::debug!("dealer dealt {card}");
            self.dealer.add_card(card);
        }

        self.current_seat = 0;
        if self.dealer.is_blackjack() {
            log::info!("dealer has blackjack");
            self.state = GameState::RoundOver;
        } else if self.players.iter().all(|hand| hand.is_blackjack()) {
            log::info!("every seat has blackjack");
            self.state = GameState::RoundOver;
        } else {
            self.state = GameState::PlayerTurn;
        }

        Ok(())
    }

    fn ensure_player_turn(&self, seat: usize) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        if seat >= self.players.len() {
            return Err(ActionError::PlayerNotFound);
        }

        if seat != self.current_seat {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    fn advance_after_seat(&mut self) {
        self.current_seat += 1;
        if self.current_seat < self.players.len() {
            return;
        }

        // Dealer only plays if someone can still beat them.
        if self.players.iter().any(|hand| !hand.is_bust()) {
            self.state = GameState::DealerTurn;
        } else {
            log::info!("every seat busted");
            self.state = GameState::RoundOver;
        }
    }

    /// Seat action: Hit (draw a card).
    ///
    /// A hit that busts the hand ends the seat's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the seat does
    /// not exist or it is not its turn, the hand is a blackjack, or the shoe is
    /// empty.
    pub fn hit(&mut self, seat: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(seat)?;

        if self.players[seat].is_blackjack() {
            return Err(ActionError::HandNotActive);
        }

        let card = self.draw().ok_or(ActionError::NoCards)?;
        let hand = &mut self.players[seat];
        log::debug!("seat {seat} hits {} and draws {card}", hand.value());
        hand.add_card(card);

        if hand.is_bust() {
            log::debug!("seat {seat} busts with {}", hand.value());
            self.advance_after_seat();
        }

        Ok(card)
    }

    /// Seat action: Stand (keep the current hand and end the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, or the seat
    /// does not exist or it is not its turn.
    pub fn stand(&mut self, seat: usize) -> Result<(), ActionError> {
        self.ensure_player_turn(seat)?;

        log::debug!("seat {seat} stands on {}", self.players[seat].evaluate());
        self.advance_after_seat();

        Ok(())
    }

    /// Plays out a seat's turn with the table's player hit policy.
    ///
    /// The seat hits while [`TableOptions::player_hits`] holds, then stands.
    /// A natural blackjack stands without drawing. Returns the cards drawn.
    ///
    /// [`TableOptions::player_hits`]: crate::TableOptions::player_hits
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the seat does
    /// not exist or it is not its turn, or the shoe runs out.
    pub fn play_player(&mut self, seat: usize) -> Result<Vec<Card>, ActionError> {
        self.ensure_player_turn(seat)?;

        let mut drawn = Vec::new();
        loop {
            let hand = &self.players[seat];
            if hand.is_blackjack() || !self.options.player_hits(hand) {
                self.stand(seat)?;
                break;
            }

            drawn.push(self.hit(seat)?);
            if self.players[seat].is_bust() {
                break;
            }
        }

        Ok(drawn)
    }

    /// Plays out every remaining seat in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the shoe
    /// runs out.
    pub fn play_players(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        while self.state == GameState::PlayerTurn {
            self.play_player(self.current_seat)?;
        }

        Ok(())
    }
}
