//! Change notifications for the presentation layer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::RoundResult;
use crate::round::Seat;

use super::GameState;

/// Something that changed at the table.
///
/// Events are recorded strictly after the mutation they describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A stake was placed.
    BetPlaced {
        /// The stake.
        stake: usize,
        /// Bankroll after the stake was debited.
        bankroll: usize,
    },
    /// Opening cards were dealt.
    Dealt {
        /// Number of active non-dealer seats.
        seat_count: u8,
    },
    /// The player drew a card.
    PlayerHit(Card),
    /// The player's hand went over 21 and the turn was ended.
    PlayerBust,
    /// The dealer revealed the hidden card and drew these cards.
    DealerPlayed(Vec<Card>),
    /// A bot seat drew these cards.
    BotPlayed {
        /// The bot seat.
        seat: Seat,
        /// Cards drawn, in order.
        cards: Vec<Card>,
    },
    /// The deck ran out while the dealer or a bot was drawing. The round is
    /// stuck in `state` until the table returns to the lobby.
    DeckExhausted {
        /// The phase that could not finish.
        state: GameState,
    },
    /// The round was resolved and the session settled.
    Resolved(RoundResult),
    /// The round was discarded and the table is back in the lobby.
    ReturnedToLobby,
}
