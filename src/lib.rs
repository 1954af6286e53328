//! A blackjack hand evaluator and table simulator with optional `no_std` support.
//!
//! The core of the crate is the hand evaluator in [`hand`]: it folds a hand's
//! cards into every total the aces allow and picks the best one. On top of it,
//! [`Game`] deals rounds from a seeded shoe between fixed-policy player seats
//! and the dealer.
//!
//! # Example
//!
//! ```
//! use bjsim::{Card, Hand, Rank, Suit};
//!
//! let mut hand = Hand::new();
//! for suit in Suit::ALL {
//!     hand.add_card(Card::new(suit, Rank::Ace));
//! }
//! assert_eq!(hand.value(), 14);
//! assert!(hand.is_soft());
//! assert!(!hand.is_bust());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{ACE_VALUES, Card, CardValue, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, ReshuffleError, RoundError, ShowdownError};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK, Hand, HandValue, best_total, has_alternative, possible_totals};
pub use options::TableOptions;
pub use result::{HandOutcome, PlayerResult, RoundResult};
