//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] type that sequences a round against
//! a fixed-policy dealer: dealing, the player's hit/stand loop, the dealer's
//! draw-to-17 loop, and outcome resolution. Rendering and input stay on the
//! other side of the [`InputSource`] and [`RoundObserver`] seams.
//!
//! # Example
//!
//! ```no_run
//! use ventuno::{GameOptions, GameSession};
//!
//! let options = GameOptions::default();
//! let session = GameSession::new(options, 42);
//! let _ = session;
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
pub mod hand;
pub mod options;
pub mod outcome;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DeckError;
pub use hand::{DealerHand, Hand, hand_value};
pub use options::{GameOptions, ReshufflePolicy};
pub use outcome::{RoundOutcome, determine_winner};
pub use session::{GameSession, InputSource, PlayerInput, RoundObserver, SilentObserver};
