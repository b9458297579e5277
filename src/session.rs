//! Bankroll and lobby statistics that outlive a single round.

use crate::error::BetError;
use crate::result::Outcome;

/// The player's bankroll, current stake and win/loss/draw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    bankroll: usize,
    stake: usize,
    wins: usize,
    losses: usize,
    draws: usize,
}

impl Session {
    /// Creates a session with the given bankroll and an empty record.
    #[must_use]
    pub const fn new(bankroll: usize) -> Self {
        Self {
            bankroll,
            stake: 0,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Places a stake, debiting it from the bankroll.
    ///
    /// A stake that is already placed is refunded first, so calling this again
    /// before the deal replaces the stake instead of adding to it.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if the stake is zero or exceeds
    /// the bankroll. The session is left unchanged.
    pub const fn place_bet(&mut self, stake: usize) -> Result<(), BetError> {
        let available = self.bankroll + self.stake;
        if stake == 0 || stake > available {
            return Err(BetError::InsufficientFunds);
        }

        self.bankroll = available - stake;
        self.stake = stake;
        Ok(())
    }

    /// Applies the player's outcome and clears the stake.
    ///
    /// The stake was debited when the bet was placed, so a loss needs no
    /// further change.
    pub const fn settle(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => {
                self.wins += 1;
                self.bankroll += self.stake;
            }
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => {
                self.draws += 1;
                self.bankroll += self.stake;
            }
        }
        self.stake = 0;
    }

    /// Returns the stake to the bankroll without touching the record.
    pub(crate) const fn refund(&mut self) {
        self.bankroll += self.stake;
        self.stake = 0;
    }

    /// Drops the stake without returning it.
    pub(crate) const fn forfeit(&mut self) {
        self.stake = 0;
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the stake for the current round (0 if none).
    #[must_use]
    pub const fn stake(&self) -> usize {
        self.stake
    }

    /// Returns the number of rounds won.
    #[must_use]
    pub const fn wins(&self) -> usize {
        self.wins
    }

    /// Returns the number of rounds lost.
    #[must_use]
    pub const fn losses(&self) -> usize {
        self.losses
    }

    /// Returns the number of rounds drawn.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }
}
