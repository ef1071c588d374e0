use crate::deck::Shoe;
use crate::error::{BetError, DealError};

use super::{RoundState, Table};

impl<S: Shoe> Table<S> {
    /// Places a bet for the named player.
    ///
    /// Returns the amount staked. A rejected bet leaves the bankroll untouched,
    /// so the caller can simply ask again.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, the player cannot be
    /// found or has already bet this round, the bet is below the table
    /// minimum, or the player lacks funds. The checks run in that order.
    pub fn bet(&self, name: &str, amount: usize) -> Result<usize, BetError> {
        if *self.state.lock() != RoundState::Betting {
            return Err(BetError::InvalidState);
        }

        let mut seats = self.seats.lock();
        let player = seats.get_mut(name).ok_or(BetError::PlayerNotFound)?;

        if player.current_bet() > 0 {
            return Err(BetError::AlreadyPlaced);
        }
        if amount < self.options.minimum_bet {
            return Err(BetError::BelowMinimum);
        }

        let staked = player.place_bet(amount)?;
        drop(seats);

        tracing::trace!(player = name, amount = staked, "bet placed");
        Ok(staked)
    }

    /// Deals the opening hands.
    ///
    /// Two passes of one card each, dealer first and then every player in
    /// seat order.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, no one is seated, or
    /// a seated player has not bet.
    pub fn deal(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if *state != RoundState::Betting {
            return Err(DealError::InvalidState);
        }

        let mut seats = self.seats.lock();
        if seats.players.is_empty() {
            return Err(DealError::NoPlayers);
        }
        if seats.players.iter().any(|p| p.current_bet() == 0) {
            return Err(DealError::MissingBets);
        }

        *state = RoundState::Dealing;

        let mut dealer = self.dealer.lock();
        let mut shoe = self.shoe.lock();

        dealer.discard_hand();
        for player in &mut seats.players {
            player.discard_hand();
        }

        for _ in 0..2 {
            dealer.receive_card(shoe.draw_top());
            for player in &mut seats.players {
                player.receive_card(shoe.draw_top());
            }
        }

        tracing::debug!(
            players = seats.players.len(),
            up_card = ?dealer.hand().up_card(),
            remaining = shoe.remaining(),
            "dealt opening hands"
        );

        drop(shoe);
        drop(dealer);
        drop(seats);

        *self.turn.lock() = 0;
        *state = RoundState::PlayerTurns;
        drop(state);

        Ok(())
    }
}
