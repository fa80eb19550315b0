//! Deck construction, shuffling, and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards.
///
/// The top of the deck is the end of the backing vector; [`Deck::deal`]
/// removes one card from there per call. A deck never gains cards over its
/// lifetime, so no card is dealt twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a standard 52-card deck in a fixed order, unshuffled.
    ///
    /// Each rank×suit combination appears exactly once. Call
    /// [`Deck::shuffle`] before dealing from it.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck that deals the given cards in order.
    ///
    /// The first element of `draws` is the first card dealt. Intended for
    /// deterministic tests and replays; no uniqueness check is applied.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards: Vec<Card> = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the deck in place, uniformly at random.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
