//! Terminal blackjack table for several players.
//!
//! Set `RUST_LOG=bjtable=debug` to see engine events on stderr.
//! Type `q` at any prompt to leave.

use core::time::Duration;
use std::io::{self, Write};
use std::process;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Action, BetError, Card, Hand, JoinError, Participant, Session, TableIo, TableOptions,
};
use tracing_subscriber::EnvFilter;

/// Pause between steps so the table is readable.
const PACE: Duration = Duration::from_millis(800);

struct Terminal;

impl TableIo for Terminal {
    fn request_player_count(&mut self) -> usize {
        prompt_usize("How many will be playing today? ")
    }

    fn request_starting_bankroll(&mut self) -> usize {
        prompt_usize("And how much money will everyone be starting with? ")
    }

    fn request_player_name(&mut self, index: usize) -> String {
        prompt_line(&format!("Player {}'s name: ", index + 1))
    }

    fn request_bet(&mut self, player: &Participant) -> usize {
        println!("{player}");
        prompt_usize(&format!("How much would {} like to bet? ", player.name()))
    }

    fn request_action(
        &mut self,
        player: &Participant,
        dealer_up_card: Card,
        hand: &Hand,
    ) -> Action {
        loop {
            print_dealer_hidden(dealer_up_card);
            print_hand(player.name(), hand.cards());
            let input = prompt_line(&format!(
                "What would {} like to do? (hit or stay): ",
                player.name()
            ));
            match input.parse::<Action>() {
                Ok(action) => {
                    thread::sleep(PACE);
                    return action;
                }
                Err(err) => println!("Please type either hit or stay ({err})"),
            }
        }
    }

    fn display_round_result(&mut self, messages: &[String]) {
        for line in messages {
            println!("{line}");
        }
    }

    fn request_continue(&mut self) -> bool {
        !matches!(prompt_line("Keep playing? ").to_lowercase().as_str(), "no" | "n" | "q")
    }

    fn reject_bet(&mut self, player: &Participant, error: BetError) {
        println!("Invalid bet: {error}");
        println!("{player}");
    }

    fn reject_name(&mut self, name: &str, error: JoinError) {
        println!("Cannot seat {name}: {error}");
    }

    fn reveal_dealer_hand(&mut self, hand: &Hand) {
        print_hand("Dealer", hand.cards());
        thread::sleep(PACE);
    }

    fn announce(&mut self, message: &str) {
        println!("{message}");
        thread::sleep(PACE);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Welcome to the Blackjack table! (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let session = Session::new(TableOptions::default(), seed);

    let rounds = session.run(&mut Terminal);
    println!("{rounds} round(s) played");
}

/// Reads one trimmed line. End of input or `q`/`quit` leaves the table.
fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => quit(),
        Ok(_) => {}
    }
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        quit();
    }
    input.to_string()
}

fn quit() -> ! {
    println!();
    println!("Goodbye.");
    process::exit(0);
}

fn prompt_usize(prompt: &str) -> usize {
    loop {
        match prompt_line(prompt).parse::<usize>() {
            Ok(value) => return value,
            Err(_) => println!("Please type in a whole, non-negative number"),
        }
    }
}

fn print_hand(name: &str, cards: &[Card]) {
    let label = format!("{name}'s hand:");
    let pad = " ".repeat(label.len());
    println!("{label}{}", " ___ ".repeat(cards.len()));
    let ranks: String = cards.iter().map(|c| format!("| {} |", c.rank_symbol())).collect();
    let suits: String = cards.iter().map(|c| format!("| {} |", c.suit.symbol())).collect();
    println!("{pad}{ranks}");
    println!("{pad}{suits}");
    println!("{pad}{}", " \u{203e}\u{203e}\u{203e} ".repeat(cards.len()));
}

fn print_dealer_hidden(up_card: Card) {
    let label = "Dealer's hand:";
    let pad = " ".repeat(label.len());
    println!("{label}{}", " ___ ".repeat(2));
    println!("{pad}| {} || ? |", up_card.rank_symbol());
    println!("{pad}| {} || ? |", up_card.suit.symbol());
    println!("{pad}{}", " \u{203e}\u{203e}\u{203e} ".repeat(2));
}
