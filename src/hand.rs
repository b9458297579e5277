//! Seat and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Hand value above which a hand is bust.
pub const BLACKJACK: u8 = 21;

/// Counts aces as 1 instead of 11, one at a time, until `sum` is no longer
/// bust or no aces remain.
///
/// ```
/// use bjtable::reduce_ace;
///
/// assert_eq!(reduce_ace(22, 1), 12);
/// assert_eq!(reduce_ace(23, 2), 13);
/// assert_eq!(reduce_ace(20, 1), 20);
/// assert_eq!(reduce_ace(31, 0), 31);
/// ```
#[must_use]
pub const fn reduce_ace(mut sum: u8, mut ace_count: u8) -> u8 {
    while sum > BLACKJACK && ace_count > 0 {
        sum -= 10;
        ace_count -= 1;
    }
    sum
}

/// A hand of cards with its running soft sum.
///
/// `sum` counts every ace as 11 and is kept alongside `ace_count` as cards
/// are added; [`Hand::value`] applies ace reduction on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    sum: u8,
    ace_count: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            sum: 0,
            ace_count: 0,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.count(card);
        self.cards.push(card);
    }

    /// Counts a card into the sum without placing it in the hand.
    const fn count(&mut self, card: Card) {
        self.sum = self.sum.saturating_add(card.value());
        if card.is_ace() {
            self.ace_count = self.ace_count.saturating_add(1);
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the soft sum (every ace counted as 11).
    #[must_use]
    pub const fn sum(&self) -> u8 {
        self.sum
    }

    /// Returns the number of aces counted into the sum.
    #[must_use]
    pub const fn ace_count(&self) -> u8 {
        self.ace_count
    }

    /// Returns the hand value after ace reduction.
    #[must_use]
    pub const fn value(&self) -> u8 {
        reduce_ace(self.sum, self.ace_count)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// The hidden card is counted into the sum from the moment it is dealt, but
/// is kept apart from the face-up cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Face-up cards plus the running sum of every dealt card.
    hand: Hand,
    hidden_card: Option<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hidden_card: None,
            hole_revealed: false,
        }
    }

    /// Deals the hidden card.
    pub fn set_hidden_card(&mut self, card: Card) {
        self.hand.count(card);
        self.hidden_card = Some(card);
    }

    /// Adds a face-up card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the hidden card.
    #[must_use]
    pub const fn hidden_card(&self) -> Option<Card> {
        self.hidden_card
    }

    /// Returns the face-up cards. The hidden card is never included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns whether the hidden card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hidden card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the soft sum, hidden card included.
    #[must_use]
    pub const fn sum(&self) -> u8 {
        self.hand.sum()
    }

    /// Returns the number of aces, hidden card included.
    #[must_use]
    pub const fn ace_count(&self) -> u8 {
        self.hand.ace_count()
    }

    /// Returns the full hand value after ace reduction.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns the value a spectator can see.
    ///
    /// Until the hole is revealed only the face-up cards count.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            return self.value();
        }

        let (sum, aces) = self
            .cards()
            .iter()
            .fold((0u8, 0u8), |(sum, aces), card| {
                (sum.saturating_add(card.value()), aces.saturating_add(u8::from(card.is_ace())))
            });
        reduce_ace(sum, aces)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns the number of face-up cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether no face-up card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}
