//! CLI blackjack table.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::card::RANKS_PER_SUIT;
use bjtable::options::{MAX_DECKS, MAX_PLAYERS, MIN_DECKS, MIN_PLAYERS};
use bjtable::{
    Decision, DecisionSource, Hand, HandStatus, Rank, RoundError, RoundOutcome, Shoe, Table,
    TableOptions, Verdict,
};
use clap::Parser;
use log::{debug, error};

const DEFAULT_DECKS: u8 = 6;
const DEFAULT_PLAYERS: u8 = 5;

#[derive(Parser, Debug)]
#[command(about = "Play blackjack against the dealer at a table of automated seats")]
struct Args {
    /// Seed for the shoe; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Dealer stands on soft 17 instead of hitting.
    #[arg(long)]
    stand_soft_17: bool,

    /// Print the shoe, next card first, at startup and after each reshuffle.
    #[arg(long)]
    show_shoe: bool,
}

/// Reads hit/stand decisions from stdin.
struct Console;

impl DecisionSource for Console {
    fn decide(&mut self, hand: &Hand, dealer_up: Option<Rank>) -> Decision {
        println!(
            "\nYour hand: {} (value {}) | dealer shows {}",
            format_cards(hand.cards()),
            hand.value(),
            dealer_up.map_or_else(|| "?".to_string(), |card| card.to_string())
        );

        loop {
            let Some(input) = prompt_line("Hit or stand? [h/s]: ") else {
                return Decision::Stand;
            };
            match input.parse::<Decision>() {
                Ok(decision) => return decision,
                Err(err) => println!("{err}."),
            }
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Welcome to the blackjack simulator!");

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    debug!("seed {seed}");

    let decks = prompt_in_range(
        &format!("How many decks? (min {MIN_DECKS}, max {MAX_DECKS}, Enter for {DEFAULT_DECKS}): "),
        MIN_DECKS,
        MAX_DECKS,
        Some(DEFAULT_DECKS),
    );
    let players = prompt_in_range(
        &format!(
            "How many players, not counting the dealer? (min {MIN_PLAYERS}, max {MAX_PLAYERS}, Enter for {DEFAULT_PLAYERS}): "
        ),
        MIN_PLAYERS,
        MAX_PLAYERS,
        Some(DEFAULT_PLAYERS),
    );
    let seat = prompt_in_range(
        &format!("Which seat are you in? (1 gets cards first, max {players}): "),
        1,
        players,
        None,
    );

    let options = TableOptions::default()
        .with_decks(decks)
        .with_players(players)
        .with_user_seat(seat)
        .with_hit_soft_17(!args.stand_soft_17);

    let mut table = match Table::new(options, seed) {
        Ok(table) => table,
        Err(err) => {
            error!("invalid table options: {err}");
            return;
        }
    };

    println!("\nGame setup: {players} players, you are in seat {seat}.");
    if args.show_shoe {
        print_shoe(table.shoe());
    }

    loop {
        if let Err(err) = play_one(&mut table, args.show_shoe) {
            println!("Round error: {err}");
            table.clear_round();
        }

        let stats = table.stats();
        println!(
            "Record: {} won, {} lost, {} pushed over {} round(s).",
            stats.wins, stats.losses, stats.pushes, stats.rounds
        );

        if !prompt_yes_no("Play another round? (y/n): ") {
            println!("Goodbye.");
            break;
        }
    }
}

fn play_one(table: &mut Table, show_shoe: bool) -> Result<(), RoundError> {
    let start = table.start_round()?;
    if start.reshuffled {
        println!("Shoe reshuffled.");
        if show_shoe {
            print_shoe(table.shoe());
        }
    }

    print_table(table);
    table.play_players(&mut Console)?;

    let user_seat = table.options().user_seat;
    for (seat, (hand, status)) in (1..).zip(table.hands().iter().zip(table.statuses())) {
        if seat != user_seat {
            println!("Player {seat}: {} ({})", describe(*status), hand.value());
        }
    }

    let drawn = table.dealer_play()?;
    if !drawn.is_empty() {
        println!("Dealer draws {}.", format_cards(&drawn));
    }

    let result = table.showdown()?;
    print_table(table);

    for seat in &result.seats {
        let marker = if seat.is_user { " (YOU)" } else { "" };
        println!(
            "Player {}{marker}: {} ({} vs {})",
            seat.seat,
            describe_outcome(seat.outcome),
            seat.player_value,
            seat.dealer_value
        );
    }
    Ok(())
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_in_range(prompt: &str, min: u8, max: u8, default: Option<u8>) -> u8 {
    loop {
        let Some(input) = prompt_line(prompt) else {
            return default.unwrap_or(min);
        };
        if input.is_empty() {
            if let Some(value) = default {
                return value;
            }
        }
        match input.parse::<u8>() {
            Ok(value) if (min..=max).contains(&value) => return value,
            _ => println!("Please enter a number between {min} and {max}."),
        }
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        match prompt_line(prompt).as_deref() {
            Some("y" | "yes") => return true,
            Some("n" | "no") | None => return false,
            Some(_) => println!("Please answer y or n."),
        }
    }
}

fn print_table(table: &Table) {
    println!("\n--- Current Hands ({} cards in shoe) ---", table.cards_remaining());

    let user_seat = table.options().user_seat;
    for (seat, hand) in (1..).zip(table.hands()) {
        let marker = if seat == user_seat { " (YOU)" } else { "" };
        println!(
            "Player {seat}{marker}: {} (value {})",
            format_cards(hand.cards()),
            hand.value()
        );
    }

    let dealer = table.dealer_hand();
    if dealer.is_hole_revealed() {
        println!(
            "Dealer: {} (value {})",
            format_cards(dealer.cards()),
            dealer.value()
        );
    } else if let Some(up) = dealer.up_card() {
        println!("Dealer: {up} ?? (showing {})", dealer.visible_value());
    }
    println!();
}

fn print_shoe(shoe: &Shoe) {
    println!("\n--- Shoe ({} cards) ---", shoe.remaining());
    for row in shoe_rows(shoe) {
        println!("{row}");
    }
}

/// Lays the shoe out in deal order, one suit's worth of ranks per row.
fn shoe_rows(shoe: &Shoe) -> Vec<String> {
    let cards: Vec<Rank> = shoe.cards().iter().rev().copied().collect();
    cards.chunks(RANKS_PER_SUIT).map(format_cards).collect()
}

fn format_cards(cards: &[Rank]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

const fn describe(status: HandStatus) -> &'static str {
    match status {
        HandStatus::Active => "still playing",
        HandStatus::Stand => "stands",
        HandStatus::Bust => "busts",
        HandStatus::Blackjack => "blackjack",
    }
}

fn describe_outcome(outcome: RoundOutcome) -> String {
    let verdict = match outcome.verdict() {
        Verdict::Win => "win",
        Verdict::Lose => "lose",
        Verdict::Push => "push",
    };
    let reason = match outcome {
        RoundOutcome::PlayerBlackjack => "blackjack",
        RoundOutcome::BlackjackPush => "both blackjack",
        RoundOutcome::DealerBlackjack => "dealer blackjack",
        RoundOutcome::PlayerBust => "bust",
        RoundOutcome::DealerBust => "dealer bust",
        RoundOutcome::PlayerHigher => "higher total",
        RoundOutcome::PlayerLower => "lower total",
        RoundOutcome::ValuePush => "equal totals",
    };
    format!("{verdict}, {reason}")
}
