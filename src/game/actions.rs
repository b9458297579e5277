use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundResult;
use crate::round::{Round, Seat};

use super::{Game, GameEvent, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerActing {
            log::warn!("player action rejected in {:?}", self.state);
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    pub(super) fn round_mut(&mut self) -> Result<&mut Round, ActionError> {
        self.round.as_mut().ok_or(ActionError::InvalidState)
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the card takes the player over 21 the turn ends at once and the
    /// round plays out exactly as if the player had stayed: the dealer and
    /// the bots still draw before the round is resolved. If the deck runs out
    /// during that play-out the drawn card is still returned; the round stays
    /// in the phase that failed and a [`GameEvent::DeckExhausted`] is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    /// An error means no card was drawn and nothing changed.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let round = self.round_mut()?;
        let card = round.hit(Seat::Player)?;
        let player = round.player();
        let bust = player.is_bust();
        log::debug!("player drew {card}, value {}", player.value());
        self.notify(GameEvent::PlayerHit(card));

        if bust {
            log::debug!("player bust, ending turn");
            self.notify(GameEvent::PlayerBust);
            // The card is already in the hand; a failed play-out is reported
            // through the state and a `DeckExhausted` event instead.
            if let Err(err) = self.play_out() {
                log::warn!("round left unresolved after bust: {err}");
            }
        }

        Ok(card)
    }

    /// Player action: Stay (keep current hand).
    ///
    /// The dealer plays, then each active bot, then the round is resolved and
    /// the session settled, all before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or if the deck runs
    /// out while the dealer or a bot is drawing. In the latter case the cards
    /// drawn so far are announced, a [`GameEvent::DeckExhausted`] is sent, and
    /// the round is left in the phase that failed. It can only be abandoned
    /// with [`Game::return_to_lobby`].
    pub fn stay(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;
        self.play_out()
    }
}
