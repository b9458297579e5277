//! A single-table blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one player and up to two
//! scripted bots against the dealer: betting, the deal, hit/stay, the dealer
//! and bot auto-play, and settlement of the player's bankroll and record.
//! Rendering is left to the caller, which reads state through `&self`
//! accessors and learns about changes from [`GameEvent`]s.
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(100).unwrap();
//! game.start_new_game(2).unwrap();
//! assert_eq!(game.state(), GameState::PlayerActing);
//!
//! let result = game.stay().unwrap();
//! assert_eq!(result.seats.len(), 2);
//! assert_eq!(game.state(), GameState::Resolved);
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
pub mod round;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, DeckError};
pub use game::{Game, GameEvent, GameState};
pub use hand::{BLACKJACK, DealerHand, Hand, reduce_ace};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult, SeatResult, determine_outcome};
pub use round::{MAX_SEATS, Round, Seat};
pub use session::Session;
