//! Round result types for showdown.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::BLACKJACK;
use crate::round::Seat;

/// Result of a seat against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Seat beats the dealer, or the dealer busts.
    Win,
    /// Seat busts or the dealer has the higher value.
    Lose,
    /// Seat and dealer have the same value.
    Draw,
}

/// Compares a seat's reduced value against the dealer's reduced value.
///
/// A bust seat loses even when the dealer also busts.
///
/// ```
/// use bjtable::{Outcome, determine_outcome};
///
/// assert_eq!(determine_outcome(19, 21), Outcome::Lose);
/// assert_eq!(determine_outcome(18, 22), Outcome::Win);
/// assert_eq!(determine_outcome(22, 22), Outcome::Lose);
/// assert_eq!(determine_outcome(20, 20), Outcome::Draw);
/// ```
#[must_use]
pub const fn determine_outcome(seat_value: u8, dealer_value: u8) -> Outcome {
    if seat_value > BLACKJACK {
        Outcome::Lose
    } else if dealer_value > BLACKJACK || seat_value > dealer_value {
        Outcome::Win
    } else if seat_value == dealer_value {
        Outcome::Draw
    } else {
        Outcome::Lose
    }
}

/// Result for a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatResult {
    /// The seat.
    pub seat: Seat,
    /// The outcome against the dealer.
    pub outcome: Outcome,
    /// The seat's reduced hand value.
    pub value: u8,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each active seat, player first.
    pub seats: Vec<SeatResult>,
    /// The dealer's final reduced value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// The stake that was settled.
    pub stake: usize,
    /// The bankroll after settlement.
    pub bankroll: usize,
}

impl RoundResult {
    /// Returns the player's outcome.
    #[must_use]
    pub fn player_outcome(&self) -> Option<Outcome> {
        self.outcome(Seat::Player)
    }

    /// Returns the outcome for `seat`, if it was active this round.
    #[must_use]
    pub fn outcome(&self, seat: Seat) -> Option<Outcome> {
        self.seats
            .iter()
            .find(|result| result.seat == seat)
            .map(|result| result.outcome)
    }
}
