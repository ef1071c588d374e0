//! Round engine and table state management.

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::{Deck, Shoe};
use crate::error::{BetError, JoinError};
use crate::options::TableOptions;
use crate::participant::Participant;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use actions::Action;
pub use state::RoundState;

/// Name of the dealer's seat.
pub const DEALER_NAME: &str = "Dealer";

/// Seated players in join order, with a name index over the same list.
#[derive(Debug, Default)]
struct Seats {
    players: Vec<Participant>,
    index: HashMap<String, usize>,
}

impl Seats {
    fn get(&self, name: &str) -> Option<&Participant> {
        self.index.get(name).and_then(|&seat| self.players.get(seat))
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Participant> {
        let seat = *self.index.get(name)?;
        self.players.get_mut(seat)
    }

    fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn push(&mut self, player: Participant) {
        self.index
            .insert(String::from(player.name()), self.players.len());
        self.players.push(player);
    }

    /// Removes every player matching `predicate`, returning their names in
    /// seat order.
    fn remove_where(&mut self, predicate: impl Fn(&Participant) -> bool) -> Vec<String> {
        let mut removed = Vec::new();
        self.players.retain(|player| {
            if predicate(player) {
                removed.push(String::from(player.name()));
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            self.rebuild_index();
        }
        removed
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (seat, player) in self.players.iter().enumerate() {
            self.index.insert(String::from(player.name()), seat);
        }
    }
}

/// A blackjack table: one shoe, one dealer and the seated players.
///
/// The table drives rounds through [`RoundState`]: `start_betting`, `bet`,
/// `deal`, `hit`/`stay` for each player in seat order, `dealer_play` and
/// finally `settle`. Methods take `&self`; state lives behind internal locks
/// and no lock is held across calls.
///
/// # Example
///
/// ```
/// use bjtable::{Action, Table, TableOptions};
///
/// let table = Table::new(TableOptions::default(), 42);
/// table.join("Ann", 100).unwrap();
/// table.start_betting().unwrap();
/// table.bet("Ann", 10).unwrap();
/// table.deal().unwrap();
/// while let Some(name) = table.current_player() {
///     table.act(&name, Action::Stay).unwrap();
/// }
/// table.dealer_play().unwrap();
/// let result = table.settle().unwrap();
/// assert_eq!(result.players.len(), 1);
/// ```
pub struct Table<S: Shoe = Deck> {
    /// Table options.
    pub options: TableOptions,
    shoe: Mutex<S>,
    state: Mutex<RoundState>,
    seats: Mutex<Seats>,
    dealer: Mutex<Participant>,
    /// Seat index of the player whose turn it is.
    turn: Mutex<usize>,
}

impl Table<Deck> {
    /// Creates a table with a freshly shuffled deck from `seed`.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_shoe(options, Deck::new(seed))
    }
}

impl<S: Shoe> Table<S> {
    /// Creates a table drawing from `shoe`.
    #[must_use]
    pub fn with_shoe(options: TableOptions, shoe: S) -> Self {
        let dealer = Participant::new(DEALER_NAME, options.dealer_bankroll);
        Self {
            options,
            shoe: Mutex::new(shoe),
            state: Mutex::new(RoundState::Init),
            seats: Mutex::new(Seats::default()),
            dealer: Mutex::new(dealer),
            turn: Mutex::new(0),
        }
    }

    /// Consumes the table and returns its shoe.
    #[must_use]
    pub fn into_shoe(self) -> S {
        self.shoe.into_inner()
    }

    /// Draws a card from the shoe.
    fn draw(&self) -> Card {
        self.shoe.lock().draw_top()
    }

    /// Seats a new player with `bankroll`.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the name is taken, or the
    /// bankroll cannot cover the minimum bet.
    pub fn join(&self, name: &str, bankroll: usize) -> Result<(), JoinError> {
        if *self.state.lock() != RoundState::Init {
            return Err(JoinError::InvalidState);
        }
        if bankroll < self.options.minimum_bet {
            return Err(JoinError::InsufficientBankroll);
        }

        let mut seats = self.seats.lock();
        if seats.contains(name) {
            return Err(JoinError::DuplicateName);
        }
        seats.push(Participant::new(name, bankroll));
        drop(seats);

        tracing::debug!(player = name, bankroll, "player joined");
        Ok(())
    }

    /// Removes a player between rounds. Returns whether anyone was removed.
    pub fn leave(&self, name: &str) -> bool {
        if *self.state.lock() != RoundState::Init {
            return false;
        }
        !self.seats.lock().remove_where(|p| p.name() == name).is_empty()
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.seats.lock().players.len()
    }

    /// Returns the seated players' names in turn order.
    pub fn player_names(&self) -> Vec<String> {
        self.seats
            .lock()
            .players
            .iter()
            .map(|p| String::from(p.name()))
            .collect()
    }

    /// Returns a snapshot of the seated players in turn order.
    pub fn players(&self) -> Vec<Participant> {
        self.seats.lock().players.clone()
    }

    /// Returns a snapshot of the named player.
    pub fn player(&self, name: &str) -> Option<Participant> {
        self.seats.lock().get(name).cloned()
    }

    /// Returns the current bankroll of the named player.
    pub fn bankroll(&self, name: &str) -> Option<usize> {
        self.seats.lock().get(name).map(Participant::bankroll)
    }

    /// Returns a snapshot of the dealer.
    pub fn dealer(&self) -> Participant {
        self.dealer.lock().clone()
    }

    /// Returns the dealer's face-up card, once dealt.
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer.lock().hand().up_card()
    }

    /// Returns the number of cards left in the shoe before it refills.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.lock().remaining()
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        *self.state.lock()
    }

    /// Returns the name of the player whose turn it is.
    ///
    /// Returns `None` outside [`RoundState::PlayerTurns`].
    pub fn current_player(&self) -> Option<String> {
        if *self.state.lock() != RoundState::PlayerTurns {
            return None;
        }
        let turn = *self.turn.lock();
        self.seats
            .lock()
            .players
            .get(turn)
            .map(|p| String::from(p.name()))
    }

    /// Opens a new round for betting.
    ///
    /// Every hand is discarded and every bet cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the previous round has not been settled or the
    /// table is empty.
    pub fn start_betting(&self) -> Result<(), BetError> {
        let mut state = self.state.lock();
        if *state != RoundState::Init {
            return Err(BetError::InvalidState);
        }

        let mut seats = self.seats.lock();
        if seats.players.is_empty() {
            return Err(BetError::NoPlayers);
        }
        for player in &mut seats.players {
            player.discard_hand();
            player.clear_bet();
        }
        drop(seats);

        self.dealer.lock().discard_hand();
        *self.turn.lock() = 0;
        *state = RoundState::Betting;
        drop(state);

        Ok(())
    }

    /// Ends the session. No further rounds can be started.
    pub fn close(&self) {
        *self.state.lock() = RoundState::Terminal;
    }
}
