//! Table engine and round flow.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ReshuffleError, RoundError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::RoundResult;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A blackjack table that deals rounds between player seats and the dealer.
///
/// The game owns the shoe, one hand per seat and the dealer's hand. Use
/// [`TableOptions`] to configure the number of seats, decks and hit policies.
#[derive(Debug, Clone)]
pub struct Game {
    /// The shoe cards are dealt from.
    pub deck: Deck,
    /// Table options.
    pub options: TableOptions,
    /// Current game state.
    state: GameState,
    /// One hand per player seat.
    players: Vec<Hand>,
    /// Dealer's hand.
    dealer: Hand,
    /// Seat whose turn it is during `PlayerTurn`.
    current_seat: usize,
}

impl Game {
    /// Creates a new game with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Game, GameState, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForDeal);
    /// assert_eq!(game.player_count(), 2);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let deck = Deck::new(options.decks, seed);
        Self::with_deck(options, deck)
    }

    /// Creates a new game dealing from the given shoe.
    #[must_use]
    pub fn with_deck(options: TableOptions, deck: Deck) -> Self {
        let players = core::iter::repeat_with(Hand::new)
            .take(usize::from(options.players))
            .collect();

        Self {
            deck,
            options,
            state: GameState::WaitingForDeal,
            players,
            dealer: Hand::new(),
            current_seat: 0,
        }
    }

    /// Reshuffles the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress (not in `WaitingForDeal` state).
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.state != GameState::WaitingForDeal {
            return Err(ReshuffleError::InvalidState);
        }

        self.deck.shuffle();
        Ok(())
    }

    /// Returns whether the shoe needs reshuffling based on penetration.
    ///
    /// If penetration is 0, always returns `false`.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.deck.needs_reshuffle(self.options.penetration)
    }

    /// Checks penetration and reshuffles if needed.
    ///
    /// This should be called between rounds. Returns `true` if a reshuffle was
    /// performed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            log::info!("shoe reshuffled");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Option<Card> {
        self.deck.deal_card()
    }

    /// Plays a full round: deal, every seat, the dealer, then showdown.
    ///
    /// The round is left in `RoundOver`; call [`Game::clear_round`] before the
    /// next one.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal, the table has
    /// no seats, or the shoe runs out of cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Game, TableOptions};
    ///
    /// let mut game = Game::new(TableOptions::default(), 7);
    /// let result = game.play_round().unwrap();
    /// assert_eq!(result.players.len(), 2);
    /// ```
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        self.deal()?;
        if self.state == GameState::PlayerTurn {
            self.play_players()?;
        }
        if self.state == GameState::DealerTurn {
            self.dealer_play()?;
        }
        self.showdown().map_err(RoundError::from)
    }

    /// Returns the number of player seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` outside of `PlayerTurn`.
    #[must_use]
    pub fn current_seat(&self) -> Option<usize> {
        (self.state == GameState::PlayerTurn).then_some(self.current_seat)
    }

    /// Returns the hand held at `seat`.
    #[must_use]
    pub fn player_hand(&self, seat: usize) -> Option<&Hand> {
        self.players.get(seat)
    }

    /// Returns every seat's hand, in seat order.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        &self.players
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Clears all hands (called at the end of a round).
    ///
    /// This also resets the turn position and returns the game to the
    /// `WaitingForDeal` state.
    pub fn clear_round(&mut self) {
        for hand in &mut self.players {
            hand.clear();
        }
        self.dealer.clear();
        self.current_seat = 0;
        self.state = GameState::WaitingForDeal;
    }
}
