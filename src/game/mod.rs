//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::round::{Round, Seat};
use crate::session::Session;

mod actions;
mod deal;
mod dealer;
pub mod events;
pub mod state;

pub use events::GameEvent;
pub use state::GameState;

/// A blackjack table engine: one player, up to two bots, and the dealer.
///
/// The game owns the session (bankroll and record) for its whole lifetime
/// and the current [`Round`] until the player returns to the lobby. All
/// mutation goes through `&mut self`; read accessors never change state, so
/// they are safe to call from a redraw tick.
#[derive(Debug)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Bankroll, stake and statistics.
    session: Session,
    /// The round being played, if any.
    round: Option<Round>,
    /// Result of the current round once resolved.
    result: Option<RoundResult>,
    /// Random number generator used to shuffle each new deck.
    rng: ChaCha8Rng,
    /// Events not yet drained by the presentation layer.
    events: Vec<GameEvent>,
    #[cfg(feature = "std")]
    subscribers: Vec<std::sync::mpsc::Sender<GameEvent>>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Lobby);
    /// assert_eq!(game.session().bankroll(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let session = Session::new(options.starting_bankroll);

        Self {
            options,
            state: GameState::Lobby,
            session,
            round: None,
            result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            events: Vec::new(),
            #[cfg(feature = "std")]
            subscribers: Vec::new(),
        }
    }

    /// Records an event and forwards it to every live subscriber.
    fn notify(&mut self, event: GameEvent) {
        #[cfg(feature = "std")]
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
        self.events.push(event);
    }

    /// Subscribes to game events.
    ///
    /// Every event recorded after this call is sent to the returned receiver.
    /// Dropping the receiver unsubscribes it.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn subscribe(&mut self) -> std::sync::mpsc::Receiver<GameEvent> {
        let (sender, receiver) = std::sync::mpsc::channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Removes and returns the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    /// Discards the current round and returns to the lobby.
    ///
    /// A stake placed before the deal is refunded. A stake riding on a round
    /// that was dealt but not resolved is forfeited. The win/loss/draw record
    /// is left untouched either way.
    pub fn return_to_lobby(&mut self) {
        if self.state != GameState::Resolved && self.session.stake() > 0 {
            if self.state == GameState::Betting {
                // Nothing has been dealt yet, so the stake goes back.
                self.session.refund();
            } else {
                log::warn!(
                    "round abandoned in {:?}, forfeiting stake {}",
                    self.state,
                    self.session.stake()
                );
                self.session.forfeit();
            }
        }

        self.round = None;
        self.result = None;
        self.state = GameState::Lobby;
        log::debug!("returned to lobby");
        self.notify(GameEvent::ReturnedToLobby);
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the session: bankroll, stake and statistics.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the round being played, if any.
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the result of the current round once it is resolved.
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the hand for `seat`, if a round is dealt and the seat is active.
    pub fn hand(&self, seat: Seat) -> Option<&Hand> {
        self.round.as_ref().and_then(|round| round.hand(seat))
    }

    /// Returns the dealer's hand, if a round is dealt.
    pub fn dealer_hand(&self) -> Option<&DealerHand> {
        self.round.as_ref().map(Round::dealer)
    }

    /// Returns the dealer's hidden card, if a round is dealt.
    pub fn hidden_card(&self) -> Option<Card> {
        self.dealer_hand().and_then(DealerHand::hidden_card)
    }

    /// Returns the number of active non-dealer seats (0 outside a round).
    pub fn seat_count(&self) -> u8 {
        self.round.as_ref().map_or(0, Round::seat_count)
    }

    /// Returns the number of cards left in the round's deck.
    pub fn cards_remaining(&self) -> usize {
        self.round.as_ref().map_or(0, Round::cards_remaining)
    }

    /// Returns whether the player may hit or stay.
    pub fn can_act(&self) -> bool {
        self.state == GameState::PlayerActing
    }
}
