//! Property-based tests for dealing, ace reduction and outcomes.

use std::collections::BTreeSet;

use bjtable::{
    BLACKJACK, Card, DECK_SIZE, Game, GameOptions, Outcome, Seat, determine_outcome, reduce_ace,
};
use proptest::prelude::*;

// Every card visible at the table, hidden card included, plus the undealt deck.
fn dealt_cards(game: &Game) -> Vec<Card> {
    let mut cards = Vec::new();
    let dealer = game.dealer_hand().expect("round is dealt");
    cards.extend(dealer.hidden_card());
    cards.extend_from_slice(dealer.cards());
    for &seat in &Seat::ALL {
        if let Some(hand) = game.hand(seat) {
            cards.extend_from_slice(hand.cards());
        }
    }
    cards
}

fn dealt_game(seed: u64, seats: u8) -> Game {
    let mut game = Game::new(GameOptions::default(), seed);
    game.place_bet(10).unwrap();
    game.start_new_game(seats).unwrap();
    game
}

proptest! {
    #[test]
    fn deal_uses_unique_cards(seed in any::<u64>(), seats in 1u8..=3) {
        let game = dealt_game(seed, seats);
        let dealt = dealt_cards(&game);

        prop_assert_eq!(dealt.len(), 2 * (usize::from(seats) + 1));

        let deck = game.round().unwrap().deck().cards();
        let all: BTreeSet<Card> = dealt.iter().chain(deck).copied().collect();
        prop_assert_eq!(all.len(), DECK_SIZE);
        prop_assert!(all.iter().all(|card| (1..=13).contains(&card.rank)));
    }

    #[test]
    fn played_round_keeps_cards_unique(seed in any::<u64>(), seats in 1u8..=3) {
        let mut game = dealt_game(seed, seats);
        game.stay().unwrap();

        let dealt = dealt_cards(&game);
        let deck = game.round().unwrap().deck().cards();
        prop_assert_eq!(dealt.len() + deck.len(), DECK_SIZE);

        let all: BTreeSet<Card> = dealt.iter().chain(deck).copied().collect();
        prop_assert_eq!(all.len(), DECK_SIZE);
    }

    #[test]
    fn dealer_and_bots_stop_at_seventeen(seed in any::<u64>(), seats in 1u8..=3) {
        let mut game = dealt_game(seed, seats);
        game.stay().unwrap();

        prop_assert!(game.dealer_hand().unwrap().sum() >= 17);
        for &seat in Seat::active(seats).iter().filter(|seat| seat.is_bot()) {
            prop_assert!(game.hand(seat).unwrap().sum() >= 17);
        }
    }

    #[test]
    fn hand_sums_match_cards(seed in any::<u64>(), seats in 1u8..=3, hits in 0usize..4) {
        let mut game = dealt_game(seed, seats);
        for _ in 0..hits {
            if game.hit().is_err() {
                break;
            }
        }

        for &seat in Seat::active(seats) {
            let hand = game.hand(seat).unwrap();
            let sum: u8 = hand.cards().iter().map(Card::value).sum();
            let aces = hand.cards().iter().filter(|card| card.is_ace()).count();
            prop_assert_eq!(hand.sum(), sum);
            prop_assert_eq!(usize::from(hand.ace_count()), aces);
        }
    }

    #[test]
    fn reduction_only_removes_whole_aces(sum in 0u8..=100, aces in 0u8..=4) {
        let reduced = reduce_ace(sum, aces);
        let removed = sum - reduced;

        prop_assert_eq!(removed % 10, 0);
        prop_assert!(removed / 10 <= aces);
        prop_assert!(reduced <= BLACKJACK || removed / 10 == aces);
        if sum <= BLACKJACK {
            prop_assert_eq!(reduced, sum);
        }
    }

    #[test]
    fn outcome_follows_comparison(seat in 2u8..=30, dealer in 2u8..=30) {
        let outcome = determine_outcome(seat, dealer);

        let expected = if seat > BLACKJACK {
            Outcome::Lose
        } else if dealer > BLACKJACK {
            Outcome::Win
        } else if seat > dealer {
            Outcome::Win
        } else if seat < dealer {
            Outcome::Lose
        } else {
            Outcome::Draw
        };
        prop_assert_eq!(outcome, expected);

        if seat <= BLACKJACK && dealer <= BLACKJACK && seat != dealer {
            prop_assert_ne!(outcome, determine_outcome(dealer, seat));
        }
    }
}
