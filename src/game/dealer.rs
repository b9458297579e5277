use alloc::vec::Vec;

use crate::error::{ActionError, DeckError};
use crate::hand::BLACKJACK;
use crate::result::{RoundResult, SeatResult, determine_outcome};
use crate::round::Seat;

use super::{Game, GameEvent, GameState};

impl Game {
    /// Plays out the dealer and the bots, then resolves the round.
    ///
    /// Cards drawn before the deck runs out are still announced.
    pub(super) fn play_out(&mut self) -> Result<RoundResult, ActionError> {
        self.state = GameState::DealerActing;
        let stands_at = self.options.dealer_stands_at.min(BLACKJACK);
        let mut drawn = Vec::new();
        let played = self.round_mut()?.play_dealer(stands_at, &mut drawn);
        log::debug!("dealer drew {} card(s)", drawn.len());
        self.notify(GameEvent::DealerPlayed(drawn));
        self.check_played(played)?;

        self.state = GameState::BotsActing;
        let stands_at = self.options.bot_stands_at.min(BLACKJACK);
        let seats = self.round_mut()?.seats();
        for &seat in seats.iter().filter(|seat| seat.is_bot()) {
            let mut cards = Vec::new();
            let played = self.round_mut()?.play_bot(seat, stands_at, &mut cards);
            log::debug!("{seat:?} drew {} card(s)", cards.len());
            self.notify(GameEvent::BotPlayed { seat, cards });
            self.check_played(played)?;
        }

        self.resolve()
    }

    fn check_played(&mut self, played: Result<(), DeckError>) -> Result<(), ActionError> {
        if let Err(err) = played {
            log::warn!("{err} in {:?}, round cannot finish", self.state);
            self.notify(GameEvent::DeckExhausted { state: self.state });
            return Err(err.into());
        }

        Ok(())
    }

    /// Compares every active seat against the dealer and settles the
    /// player's outcome. Bot outcomes are reported but never touch the
    /// session.
    fn resolve(&mut self) -> Result<RoundResult, ActionError> {
        let round = self.round.as_ref().ok_or(ActionError::InvalidState)?;
        let dealer = round.dealer();
        let dealer_value = dealer.value();
        let dealer_bust = dealer.is_bust();

        let seats: Vec<SeatResult> = round
            .seats()
            .iter()
            .filter_map(|&seat| {
                let value = round.hand(seat)?.value();
                Some(SeatResult {
                    seat,
                    outcome: determine_outcome(value, dealer_value),
                    value,
                })
            })
            .collect();

        let stake = self.session.stake();
        if let Some(player) = seats.iter().find(|result| result.seat == Seat::Player) {
            self.session.settle(player.outcome);
            log::info!(
                "round resolved: player {:?} with {} against dealer {dealer_value}, bankroll {}",
                player.outcome,
                player.value,
                self.session.bankroll()
            );
        }

        let result = RoundResult {
            seats,
            dealer_value,
            dealer_bust,
            stake,
            bankroll: self.session.bankroll(),
        };

        self.state = GameState::Resolved;
        self.result = Some(result.clone());
        self.notify(GameEvent::Resolved(result.clone()));

        Ok(result)
    }
}
