use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::round::{MAX_SEATS, Round};

use super::{Game, GameEvent, GameState};

impl Game {
    /// Places the stake for the next round, debiting it from the bankroll.
    ///
    /// Placing a new stake before the deal replaces the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round has been dealt and the table has not
    /// returned to the lobby, or if the stake is zero or exceeds the bankroll.
    pub fn place_bet(&mut self, stake: usize) -> Result<(), BetError> {
        if !matches!(self.state, GameState::Lobby | GameState::Betting) {
            log::warn!("bet rejected in {:?}", self.state);
            return Err(BetError::InvalidState);
        }

        if let Err(err) = self.session.place_bet(stake) {
            log::warn!(
                "stake {stake} rejected with bankroll {}",
                self.session.bankroll()
            );
            return Err(err);
        }

        self.state = GameState::Betting;
        log::debug!(
            "stake {stake} placed, bankroll {}",
            self.session.bankroll()
        );
        self.notify(GameEvent::BetPlaced {
            stake,
            bankroll: self.session.bankroll(),
        });

        Ok(())
    }

    /// Builds and shuffles a fresh deck, then deals a new round.
    ///
    /// See [`Game::start_with_deck`] for the deal order.
    ///
    /// # Errors
    ///
    /// Returns an error if `seat_count` is not 1, 2 or 3, the table is not in
    /// the betting state, or no stake has been placed.
    pub fn start_new_game(&mut self, seat_count: u8) -> Result<(), DealError> {
        self.check_deal(seat_count)?;
        let deck = Deck::shuffled(&mut self.rng);
        self.start_with_deck(seat_count, deck)
    }

    /// Deals a new round from the given deck.
    ///
    /// Cards are drawn from the top in a fixed order: the dealer's hidden
    /// card, the dealer's face-up card, two cards for the player, then two for
    /// each active bot. The player then acts.
    ///
    /// # Errors
    ///
    /// Returns an error if `seat_count` is not 1, 2 or 3, the table is not in
    /// the betting state, no stake has been placed, or the deck runs out. On
    /// error the table is left as it was.
    pub fn start_with_deck(&mut self, seat_count: u8, deck: Deck) -> Result<(), DealError> {
        self.check_deal(seat_count)?;

        let round = Round::deal(deck, seat_count)?;
        log::debug!(
            "dealt {seat_count} seat(s), {} cards left",
            round.cards_remaining()
        );
        self.round = Some(round);
        self.state = GameState::PlayerActing;
        self.notify(GameEvent::Dealt { seat_count });

        Ok(())
    }

    fn check_deal(&self, seat_count: u8) -> Result<(), DealError> {
        if !(1..=MAX_SEATS).contains(&seat_count) {
            return Err(DealError::InvalidSeatCount);
        }

        match self.state {
            GameState::Betting => Ok(()),
            GameState::Lobby => Err(DealError::NoStake),
            _ => Err(DealError::InvalidState),
        }
    }
}
