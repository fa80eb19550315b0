//! Game session and turn sequencing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::{DealerHand, Hand};
use crate::options::{GameOptions, ReshufflePolicy};
use crate::outcome::{RoundOutcome, determine_winner};

/// An input delivered by the presentation layer.
///
/// The session consumes [`Hit`] and [`Stand`] at decision points; everything
/// else is ignored there and re-polled. [`StartRound`] and [`Quit`] are for
/// the presentation layer's outer loop.
///
/// [`Hit`]: PlayerInput::Hit
/// [`Stand`]: PlayerInput::Stand
/// [`StartRound`]: PlayerInput::StartRound
/// [`Quit`]: PlayerInput::Quit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Draw one card.
    Hit,
    /// End the player phase.
    Stand,
    /// Start a new round.
    StartRound,
    /// Quit the game.
    Quit,
}

/// A source of player inputs.
///
/// [`poll`] may block for as long as it likes; the session imposes no
/// timeout and keeps polling until it receives an input it can act on.
///
/// [`poll`]: InputSource::poll
pub trait InputSource {
    /// Blocks until the next input is available and returns it.
    fn poll(&mut self) -> PlayerInput;
}

/// Presentation hook notified after every state change.
///
/// Implementations draw the table however they like; the engine only hands
/// them the current hands. Card-to-asset resolution is entirely theirs.
pub trait RoundObserver {
    /// Called whenever a hand changed or the hole card was revealed.
    fn table_changed(&mut self, player: &Hand, dealer: &DealerHand);

    /// Called once the round outcome is resolved.
    fn round_over(&mut self, outcome: RoundOutcome) {
        let _ = outcome;
    }
}

/// An observer that ignores all notifications, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl RoundObserver for SilentObserver {
    fn table_changed(&mut self, _player: &Hand, _dealer: &DealerHand) {}
}

/// A single-player blackjack session.
///
/// The session owns the deck, both hands, and the RNG; nothing is shared or
/// global. One round runs as: [`begin_round`], [`play_player_phase`],
/// [`play_dealer_phase`], [`outcome`] — or [`play_round`] for the whole
/// sequence.
///
/// # Example
///
/// ```no_run
/// use ventuno::{GameOptions, GameSession};
///
/// let session = GameSession::new(GameOptions::default(), 42);
/// let _ = session;
/// ```
///
/// [`begin_round`]: GameSession::begin_round
/// [`play_player_phase`]: GameSession::play_player_phase
/// [`play_dealer_phase`]: GameSession::play_dealer_phase
/// [`outcome`]: GameSession::outcome
/// [`play_round`]: GameSession::play_round
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Cards remaining to deal.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: DealerHand,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Creates a new session with a freshly shuffled deck.
    ///
    /// Sessions created with the same options and seed play out identically
    /// given the same inputs.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        Self {
            deck,
            options,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            rng,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Starts a new round.
    ///
    /// Applies the reshuffle policy, clears both hands, then deals two cards
    /// to the player and two to the dealer. The dealer's second card stays
    /// face down until the player phase ends.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck runs out during the
    /// initial deal (only possible under
    /// [`ReshufflePolicy::PlayThroughDeck`]).
    pub fn begin_round(&mut self) -> Result<(), DeckError> {
        match self.options.reshuffle {
            ReshufflePolicy::FreshDeckEachRound => {
                self.deck = Deck::standard();
                self.deck.shuffle(&mut self.rng);
            }
            ReshufflePolicy::PlayThroughDeck => {}
        }

        self.player_hand.clear();
        self.dealer_hand.clear();

        self.player_hand.add_card(self.deck.deal()?);
        self.player_hand.add_card(self.deck.deal()?);
        self.dealer_hand.add_card(self.deck.deal()?);
        self.dealer_hand.add_card(self.deck.deal()?);

        Ok(())
    }

    /// Runs the player's decision loop.
    ///
    /// While the player's value is under 21, the observer is notified and
    /// the input source polled. `Hit` deals one card, `Stand` ends the
    /// phase, and any other input is silently ignored and re-polled. The
    /// dealer's hole card is revealed once the phase ends.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if a hit cannot be dealt. The round
    /// cannot continue in that case.
    pub fn play_player_phase<I, O>(&mut self, input: &mut I, observer: &mut O) -> Result<(), DeckError>
    where
        I: InputSource,
        O: RoundObserver,
    {
        while self.player_hand.value() < 21 {
            observer.table_changed(&self.player_hand, &self.dealer_hand);

            match input.poll() {
                PlayerInput::Hit => {
                    let card = self.deck.deal()?;
                    self.player_hand.add_card(card);
                }
                PlayerInput::Stand => break,
                // Not a decision; keep polling.
                PlayerInput::StartRound | PlayerInput::Quit => {}
            }
        }

        self.dealer_hand.reveal_hole();
        observer.table_changed(&self.player_hand, &self.dealer_hand);

        Ok(())
    }

    /// Runs the dealer's fixed policy: draw while under 17.
    ///
    /// The dealer never decides anything and never blocks; it may bust.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if a draw cannot be dealt.
    pub fn play_dealer_phase<O>(&mut self, observer: &mut O) -> Result<(), DeckError>
    where
        O: RoundObserver,
    {
        while self.dealer_hand.value() < 17 {
            let card = self.deck.deal()?;
            self.dealer_hand.add_card(card);
            observer.table_changed(&self.player_hand, &self.dealer_hand);
        }

        Ok(())
    }

    /// Resolves the round from both hands as they stand.
    ///
    /// Call after both phases have finished.
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        determine_winner(self.player_hand.value(), self.dealer_hand.value())
    }

    /// Plays one full round: deal, player phase, dealer phase, resolution.
    ///
    /// The dealer phase always runs, even after a player bust, matching the
    /// table flow this engine models.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck runs out at any point;
    /// the round is abandoned.
    pub fn play_round<I, O>(&mut self, input: &mut I, observer: &mut O) -> Result<RoundOutcome, DeckError>
    where
        I: InputSource,
        O: RoundObserver,
    {
        self.begin_round()?;
        self.play_player_phase(input, observer)?;
        self.play_dealer_phase(observer)?;

        let outcome = self.outcome();
        observer.round_over(outcome);

        Ok(outcome)
    }
}
