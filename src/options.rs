//! Game configuration options.

use crate::hand::BLACKJACK;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_bankroll(500)
///     .with_dealer_stands_at(17);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Bankroll the session starts with.
    pub starting_bankroll: usize,
    /// Soft sum at which the dealer stops drawing. Values above 21 are
    /// treated as 21.
    pub dealer_stands_at: u8,
    /// Soft sum at which a bot seat stops drawing. Values above 21 are
    /// treated as 21.
    pub bot_stands_at: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 1000,
            dealer_stands_at: 17,
            bot_stands_at: 17,
        }
    }
}

impl GameOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the soft sum at which the dealer stands, capped at 21.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, threshold: u8) -> Self {
        self.dealer_stands_at = clamp_threshold(threshold);
        self
    }

    /// Sets the soft sum at which bot seats stand, capped at 21.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_bot_stands_at(15);
    /// assert_eq!(options.bot_stands_at, 15);
    ///
    /// let options = GameOptions::default().with_bot_stands_at(40);
    /// assert_eq!(options.bot_stands_at, 21);
    /// ```
    #[must_use]
    pub const fn with_bot_stands_at(mut self, threshold: u8) -> Self {
        self.bot_stands_at = clamp_threshold(threshold);
        self
    }
}

const fn clamp_threshold(threshold: u8) -> u8 {
    if threshold > BLACKJACK {
        BLACKJACK
    } else {
        threshold
    }
}
