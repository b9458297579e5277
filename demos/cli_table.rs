//! CLI blackjack table example.
//!
//! Run with `RUST_LOG=debug` to watch the engine's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Card, DealerHand, Game, GameOptions, GameState, Hand, Outcome, Seat, Suit};

fn main() {
    env_logger::init();
    println!("Blackjack table example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        print_lobby(&game);

        let bankroll = game.session().bankroll();
        if bankroll == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(seats) = prompt_number("Seats (1-3, 0 to quit): ") else {
            break;
        };
        if seats == 0 {
            println!("Goodbye.");
            break;
        }

        let Some(stake) = prompt_number(&format!("Stake (1-{bankroll}): ")) else {
            break;
        };

        if let Err(err) = game.place_bet(stake) {
            println!("Bet error: {err}");
            continue;
        }

        let seat_count = u8::try_from(seats).unwrap_or(u8::MAX);
        if let Err(err) = game.start_new_game(seat_count) {
            println!("Deal error: {err}");
            game.return_to_lobby();
            continue;
        }

        while game.can_act() {
            print_table(&game);

            let result = match prompt_line("[h]it [s]tay [q]uit: ").as_str() {
                "h" | "hit" => game.hit().map(|card| println!("You drew {}", format_card(&card))),
                "s" | "stay" => game.stay().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_table(&game);
        if let Some(result) = game.result() {
            for seat in &result.seats {
                println!(
                    "{:?}: {} -> {}",
                    seat.seat,
                    seat.value,
                    format_outcome(seat.outcome)
                );
            }
            println!("Dealer: {}", result.dealer_value);
        }

        game.return_to_lobby();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_number(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_lobby(game: &Game) {
    let session = game.session();
    println!(
        "\nBankroll {} | wins {} | losses {} | draws {}",
        session.bankroll(),
        session.wins(),
        session.losses(),
        session.draws()
    );
}

fn print_table(game: &Game) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());

    if let Some(dealer) = game.dealer_hand() {
        println!(
            "Dealer: {} (value {})",
            format_dealer(dealer),
            dealer.visible_value()
        );
    }

    for &seat in &Seat::ALL {
        if let Some(hand) = game.hand(seat) {
            println!("{seat:?}: {} (value {})", format_hand(hand), hand.value());
        }
    }

    if game.state() == GameState::PlayerActing {
        println!("Stake: {}", game.session().stake());
    }
    println!();
}

fn format_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win => colorize("win", "32"),
        Outcome::Lose => colorize("lose", "31"),
        Outcome::Draw => colorize("draw", "33"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    let mut parts = Vec::new();
    match dealer.hidden_card() {
        Some(card) if dealer.is_hole_revealed() => parts.push(format_card(&card)),
        Some(_) => parts.push("??".to_string()),
        None => {}
    }
    parts.extend(dealer.cards().iter().map(format_card));
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
