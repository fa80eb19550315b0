//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use ventuno::{
    Card, DealerHand, DeckError, GameOptions, GameSession, Hand, InputSource, PlayerInput, Rank,
    RoundObserver, RoundOutcome, Suit,
};

fn main() {
    println!("Blackjack CLI example");
    println!("Get as close to 21 as possible without going over.");
    println!("Aces count 1 or 11; face cards count 10.\n");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = GameSession::new(GameOptions::default(), seed);

    loop {
        match prompt_line("[s]tart round, [q]uit: ").as_str() {
            "s" | "start" | "" => {}
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => continue,
        }

        match session.play_round(&mut StdinInput, &mut Terminal) {
            Ok(_) => {}
            Err(DeckError::Exhausted) => {
                println!("The deck ran out of cards; round abandoned.");
                break;
            }
        }
    }
}

struct StdinInput;

impl InputSource for StdinInput {
    fn poll(&mut self) -> PlayerInput {
        loop {
            match prompt_line("Do you want to hit or stand? (h/s): ").as_str() {
                "h" | "hit" => return PlayerInput::Hit,
                "s" | "stand" => return PlayerInput::Stand,
                "q" | "quit" => return PlayerInput::Quit,
                _ => println!("Unknown input."),
            }
        }
    }
}

struct Terminal;

impl RoundObserver for Terminal {
    fn table_changed(&mut self, player: &Hand, dealer: &DealerHand) {
        print_table(player, dealer);
    }

    fn round_over(&mut self, outcome: RoundOutcome) {
        println!("{outcome}\n");
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

fn print_table(player: &Hand, dealer: &DealerHand) {
    println!("\nDealer: {} (value {})", format_dealer(dealer), format_dealer_value(dealer));
    println!(
        "Player: {} (value {})\n",
        format_cards(player.cards()),
        player.value()
    );
}

fn format_dealer_value(dealer: &DealerHand) -> String {
    if dealer.is_hole_revealed() {
        dealer.value().to_string()
    } else {
        "?".to_string()
    }
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.cards().is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        format_cards(dealer.cards())
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        pip => pip.base_value().to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
