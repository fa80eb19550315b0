//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur while dealing from the deck.
///
/// Invalid player decisions are deliberately not represented here: the
/// session silently re-polls the input source instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    ///
    /// Fatal to the current round; callers should surface it to the player
    /// rather than swallowing it.
    #[error("no cards left in the deck")]
    Exhausted,
}
