//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Stake is zero or exceeds the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// A round is in progress or awaiting a return to the lobby.
    #[error("invalid game state for betting")]
    InvalidState,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Seat count is outside 1..=3.
    #[error("seat count must be between 1 and 3")]
    InvalidSeatCount,
    /// A round is already in progress or awaiting a return to the lobby.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No stake has been placed for this round.
    #[error("no stake has been placed")]
    NoStake,
    /// Not enough cards in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for DealError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Action attempted outside the player's turn.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for ActionError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}
