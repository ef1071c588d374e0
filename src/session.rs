//! A session driver that runs rounds against a presentation layer.
//!
//! The engine never reads input or prints output itself. A front-end
//! implements [`TableIo`] and [`Session`] calls it at each decision point.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::{Deck, Shoe};
use crate::error::{BetError, JoinError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::participant::Participant;
use crate::result::RoundResult;
use crate::table::{Action, RoundState, Table};

/// Input and output callbacks supplied by a front-end.
///
/// Validation of free-form input (numbers, `hit`/`stay`) belongs to the
/// implementor; engine-level validation (bet limits, duplicate names) is
/// reported back through [`TableIo::reject_bet`] and
/// [`TableIo::reject_name`] before asking again.
pub trait TableIo {
    /// Asks how many players will sit down.
    fn request_player_count(&mut self) -> usize;

    /// Asks for the bankroll every player starts with.
    fn request_starting_bankroll(&mut self) -> usize;

    /// Asks for the name of the player at `index` (0-based).
    fn request_player_name(&mut self, index: usize) -> String;

    /// Asks `player` for a bet.
    fn request_bet(&mut self, player: &Participant) -> usize;

    /// Asks `player` to hit or stay, showing only the dealer's up-card.
    fn request_action(
        &mut self,
        player: &Participant,
        dealer_up_card: Card,
        hand: &Hand,
    ) -> Action;

    /// Shows the settlement narration for a round.
    fn display_round_result(&mut self, messages: &[String]);

    /// Asks whether to play another round.
    fn request_continue(&mut self) -> bool;

    /// Reports a rejected bet before asking again.
    fn reject_bet(&mut self, _player: &Participant, _error: BetError) {}

    /// Reports a rejected name before asking again.
    fn reject_name(&mut self, _name: &str, _error: JoinError) {}

    /// Shows the dealer's finished hand before settlement.
    fn reveal_dealer_hand(&mut self, _hand: &Hand) {}

    /// Shows incidental narration such as busts or the end of the game.
    fn announce(&mut self, _message: &str) {}
}

/// Drives a [`Table`] through repeated rounds.
pub struct Session<S: Shoe = Deck> {
    table: Table<S>,
}

impl Session<Deck> {
    /// Creates a session over a fresh table with a deck shuffled from `seed`.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_table(Table::new(options, seed))
    }
}

impl<S: Shoe> Session<S> {
    /// Creates a session over an existing table.
    #[must_use]
    pub const fn with_table(table: Table<S>) -> Self {
        Self { table }
    }

    /// Returns the underlying table.
    #[must_use]
    pub const fn table(&self) -> &Table<S> {
        &self.table
    }

    /// Consumes the session and returns the table.
    #[must_use]
    pub fn into_table(self) -> Table<S> {
        self.table
    }

    /// Seats the players. Returns how many were seated.
    ///
    /// If the starting bankroll cannot cover the minimum bet, nobody is
    /// seated. A duplicate name is rejected and asked for again; any other
    /// join error (for example a table that is no longer open for joining)
    /// is reported once and stops seating.
    pub fn seat_players<I: TableIo>(&self, io: &mut I) -> usize {
        let count = io.request_player_count();
        let bankroll = io.request_starting_bankroll();

        if bankroll < self.table.options.minimum_bet {
            io.announce("Nobody can cover the minimum bet");
            return 0;
        }

        let mut seated = 0;
        for index in 0..count {
            loop {
                let name = io.request_player_name(index);
                match self.table.join(&name, bankroll) {
                    Ok(()) => break,
                    Err(JoinError::DuplicateName) => {
                        io.reject_name(&name, JoinError::DuplicateName);
                    }
                    Err(err) => {
                        io.reject_name(&name, err);
                        tracing::warn!(seated, error = %err, "seating stopped");
                        return seated;
                    }
                }
            }
            seated += 1;
        }

        tracing::info!(players = seated, bankroll, "players seated");
        seated
    }

    /// Plays one full round: bets, deal, player turns, dealer turn and
    /// settlement.
    ///
    /// Returns `None` if a round cannot start (empty or closed table).
    pub fn play_round<I: TableIo>(&self, io: &mut I) -> Option<RoundResult> {
        self.table.start_betting().ok()?;

        for name in self.table.player_names() {
            loop {
                let player = self.table.player(&name)?;
                let amount = io.request_bet(&player);
                match self.table.bet(&name, amount) {
                    Ok(_) => break,
                    Err(err) => io.reject_bet(&player, err),
                }
            }
        }

        self.table.deal().ok()?;
        let up_card = self.table.dealer_up_card()?;

        while let Some(name) = self.table.current_player() {
            let player = self.table.player(&name)?;
            let action = io.request_action(&player, up_card, player.hand());
            let drawn = self.table.act(&name, action).ok()?;

            if drawn.is_some() && self.table.player(&name)?.hand().is_bust() {
                io.announce(&format!("{name} busts! Their bet goes to the house"));
            }
        }

        self.table.dealer_play().ok()?;
        io.reveal_dealer_hand(self.table.dealer().hand());
        let result = self.table.settle().ok()?;

        let messages: Vec<String> = result.messages();
        io.display_round_result(&messages);

        Some(result)
    }

    /// Runs a whole session: seats players, then plays rounds until everyone
    /// is eliminated or the front-end declines to continue.
    ///
    /// Returns the number of rounds played.
    pub fn run<I: TableIo>(&self, io: &mut I) -> usize {
        self.seat_players(io);

        let mut rounds = 0;
        while self.play_round(io).is_some() {
            rounds += 1;

            if self.table.state() == RoundState::Terminal {
                io.announce("Everyone lost all their money. The game is over");
                break;
            }
            if !io.request_continue() {
                break;
            }
        }

        self.table.close();
        tracing::info!(rounds, "session finished");
        io.announce("Thanks for playing!");
        rounds
    }
}
