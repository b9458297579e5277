//! The cards and hands of one round at the table.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::{DealerHand, Hand};

/// Largest number of non-dealer seats at the table.
pub const MAX_SEATS: u8 = 3;

/// A non-dealer seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    /// The human player.
    Player,
    /// The first scripted bot.
    Bot1,
    /// The second scripted bot.
    Bot2,
}

impl Seat {
    /// Seats in deal and play order.
    pub const ALL: [Self; 3] = [Self::Player, Self::Bot1, Self::Bot2];

    /// Returns the seats active for a table of `seat_count` seats.
    #[must_use]
    pub const fn active(seat_count: u8) -> &'static [Self] {
        match seat_count {
            0 => &[],
            1 => &[Self::Player],
            2 => &[Self::Player, Self::Bot1],
            _ => &Self::ALL,
        }
    }

    /// Returns whether this seat is played by a bot.
    #[must_use]
    pub const fn is_bot(self) -> bool {
        !matches!(self, Self::Player)
    }

    const fn index(self) -> usize {
        match self {
            Self::Player => 0,
            Self::Bot1 => 1,
            Self::Bot2 => 2,
        }
    }
}

/// A round in progress: the deck, the dealer and one hand per active seat.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    dealer: DealerHand,
    hands: Vec<Hand>,
}

impl Round {
    /// Deals the opening cards from `deck`.
    ///
    /// The order is fixed: dealer hidden card, dealer face-up card, two cards
    /// for the player, then two for each active bot in seat order.
    pub(crate) fn deal(mut deck: Deck, seat_count: u8) -> Result<Self, DeckError> {
        let mut dealer = DealerHand::new();
        dealer.set_hidden_card(deck.draw()?);
        dealer.add_card(deck.draw()?);

        let mut hands = Vec::with_capacity(usize::from(seat_count));
        for _ in Seat::active(seat_count) {
            let mut hand = Hand::new();
            hand.add_card(deck.draw()?);
            hand.add_card(deck.draw()?);
            hands.push(hand);
        }

        Ok(Self {
            deck,
            dealer,
            hands,
        })
    }

    /// Draws one card into `seat`'s hand.
    pub(crate) fn hit(&mut self, seat: Seat) -> Result<Card, DeckError> {
        let card = self.deck.draw()?;
        if let Some(hand) = self.hands.get_mut(seat.index()) {
            hand.add_card(card);
        }
        Ok(card)
    }

    /// Draws dealer cards until the soft sum reaches `stands_at`.
    ///
    /// Cards are pushed onto `drawn` as they are dealt, so the caller still
    /// sees them if the deck runs out part way.
    pub(crate) fn play_dealer(
        &mut self,
        stands_at: u8,
        drawn: &mut Vec<Card>,
    ) -> Result<(), DeckError> {
        self.dealer.reveal_hole();

        while self.dealer.sum() < stands_at {
            let card = self.deck.draw()?;
            self.dealer.add_card(card);
            drawn.push(card);
        }
        Ok(())
    }

    /// Draws cards for a bot seat until its soft sum reaches `stands_at`.
    pub(crate) fn play_bot(
        &mut self,
        seat: Seat,
        stands_at: u8,
        drawn: &mut Vec<Card>,
    ) -> Result<(), DeckError> {
        while self.hand(seat).is_some_and(|hand| hand.sum() < stands_at) {
            drawn.push(self.hit(seat)?);
        }
        Ok(())
    }

    /// Returns the hand for `seat`, or `None` if the seat is not active.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> Option<&Hand> {
        self.hands.get(seat.index())
    }

    /// Returns the player's hand.
    #[must_use]
    pub fn player(&self) -> &Hand {
        &self.hands[0]
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the active seats, player first.
    #[must_use]
    pub fn seats(&self) -> &'static [Seat] {
        Seat::active(self.seat_count())
    }

    /// Returns the number of active non-dealer seats.
    #[must_use]
    pub fn seat_count(&self) -> u8 {
        self.hands.len() as u8
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
