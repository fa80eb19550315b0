//! Round outcome classification.

use core::fmt;

/// The result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player busted (dealer wins).
    PlayerBust,
    /// Dealer busted (player wins).
    DealerBust,
    /// Equal values, no winner.
    Push,
    /// Player wins on value.
    PlayerWin,
    /// Dealer wins on value.
    DealerWin,
}

impl RoundOutcome {
    /// Returns a player-facing message for the outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Player busts! Dealer wins.",
            Self::DealerBust => "Dealer busts! Player wins.",
            Self::Push => "It's a push!",
            Self::PlayerWin => "Player wins!",
            Self::DealerWin => "Dealer wins.",
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWin)
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Classifies a round from both finalized hand values.
///
/// The checks apply in a fixed precedence: player bust, then dealer bust,
/// then push, then player win, then dealer win. Equal values push even at
/// 21, since the equality check precedes the 21 special case.
///
/// # Example
///
/// ```
/// use ventuno::{RoundOutcome, determine_winner};
///
/// assert_eq!(determine_winner(22, 18), RoundOutcome::PlayerBust);
/// assert_eq!(determine_winner(20, 20), RoundOutcome::Push);
/// assert_eq!(determine_winner(19, 18), RoundOutcome::PlayerWin);
/// ```
#[must_use]
pub const fn determine_winner(player_value: u8, dealer_value: u8) -> RoundOutcome {
    if player_value > 21 {
        RoundOutcome::PlayerBust
    } else if dealer_value > 21 {
        RoundOutcome::DealerBust
    } else if player_value == dealer_value {
        RoundOutcome::Push
    } else if player_value == 21 || (dealer_value < 21 && player_value > dealer_value) {
        RoundOutcome::PlayerWin
    } else {
        RoundOutcome::DealerWin
    }
}
