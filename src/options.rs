//! Game configuration options.

/// When the deck is rebuilt and reshuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ReshufflePolicy {
    /// Build and shuffle a fresh 52-card deck at the start of every round.
    #[default]
    FreshDeckEachRound,
    /// Shuffle once at session creation and deplete the deck across rounds.
    ///
    /// Dealing eventually fails with [`DeckError::Exhausted`], which ends
    /// the round.
    ///
    /// [`DeckError::Exhausted`]: crate::DeckError::Exhausted
    PlayThroughDeck,
}

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use ventuno::{GameOptions, ReshufflePolicy};
///
/// let options = GameOptions::default().with_reshuffle(ReshufflePolicy::PlayThroughDeck);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Deck reshuffle policy.
    pub reshuffle: ReshufflePolicy,
}

impl GameOptions {
    /// Sets the reshuffle policy.
    ///
    /// # Example
    ///
    /// ```
    /// use ventuno::{GameOptions, ReshufflePolicy};
    ///
    /// let options = GameOptions::default().with_reshuffle(ReshufflePolicy::PlayThroughDeck);
    /// assert_eq!(options.reshuffle, ReshufflePolicy::PlayThroughDeck);
    /// ```
    #[must_use]
    pub const fn with_reshuffle(mut self, policy: ReshufflePolicy) -> Self {
        self.reshuffle = policy;
        self
    }
}
