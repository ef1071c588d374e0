use core::str::FromStr;

use crate::card::Card;
use crate::deck::Shoe;
use crate::error::{ActionError, ParseActionError};

use super::{RoundState, Table};

/// A player's decision on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Keep the current hand and end the turn.
    Stay,
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses `hit`/`h` or `stay`/`s`, ignoring case and surrounding space.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("hit") || input.eq_ignore_ascii_case("h") {
            Ok(Self::Hit)
        } else if input.eq_ignore_ascii_case("stay") || input.eq_ignore_ascii_case("s") {
            Ok(Self::Stay)
        } else {
            Err(ParseActionError)
        }
    }
}

impl<S: Shoe> Table<S> {
    fn ensure_player_turn(&self, name: &str) -> Result<usize, ActionError> {
        if *self.state.lock() != RoundState::PlayerTurns {
            return Err(ActionError::InvalidState);
        }

        let seats = self.seats.lock();
        let seat = *seats.index.get(name).ok_or(ActionError::PlayerNotFound)?;
        drop(seats);

        if seat != *self.turn.lock() {
            return Err(ActionError::NotYourTurn);
        }

        Ok(seat)
    }

    /// Moves the turn to the next seat, handing over to the dealer after the
    /// last one.
    fn advance_turn(&self) {
        let mut turn = self.turn.lock();
        *turn += 1;
        let done = *turn >= self.seats.lock().players.len();
        drop(turn);

        if done {
            *self.state.lock() = RoundState::DealerTurn;
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hit that takes the hand over 21 busts it and ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in player turns, the player cannot
    /// be found, or it is not the player's turn.
    pub fn hit(&self, name: &str) -> Result<Card, ActionError> {
        let seat = self.ensure_player_turn(name)?;

        let card = self.draw();

        let mut seats = self.seats.lock();
        let player = seats
            .players
            .get_mut(seat)
            .ok_or(ActionError::PlayerNotFound)?;
        player.receive_card(card);
        let value = player.hand().value();
        drop(seats);

        tracing::trace!(player = name, %card, value, "hit");

        if value > 21 {
            tracing::debug!(player = name, value, "bust");
            self.advance_turn();
        }

        Ok(card)
    }

    /// Player action: Stay (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in player turns, the player cannot
    /// be found, or it is not the player's turn.
    pub fn stay(&self, name: &str) -> Result<(), ActionError> {
        self.ensure_player_turn(name)?;
        self.advance_turn();
        Ok(())
    }

    /// Applies `action` for the named player.
    ///
    /// Returns the drawn card for [`Action::Hit`].
    ///
    /// # Errors
    ///
    /// See [`Table::hit`] and [`Table::stay`].
    pub fn act(&self, name: &str, action: Action) -> Result<Option<Card>, ActionError> {
        match action {
            Action::Hit => self.hit(name).map(Some),
            Action::Stay => self.stay(name).map(|()| None),
        }
    }
}
