use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Shoe;
use crate::error::SettleError;
use crate::result::{HandOutcome, PlayerResult, RoundResult};

use super::{RoundState, Table};

impl<S: Shoe> Table<S> {
    /// Returns whether the dealer must stop drawing.
    fn dealer_stands(&self, value: u8, is_soft: bool) -> bool {
        let target = self.options.dealer_stands_on;
        value > target || (value == target && (!is_soft || self.options.stand_on_soft_17))
    }

    /// Dealer plays their hand according to the table rules.
    ///
    /// The dealer draws while below `dealer_stands_on` (17 by default) and
    /// stands at or above it. Soft 17 stands unless `stand_on_soft_17` is
    /// off. The dealer plays out the hand even if every player has busted.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the dealer's turn.
    pub fn dealer_play(&self) -> Result<Vec<Card>, SettleError> {
        if *self.state.lock() != RoundState::DealerTurn {
            return Err(SettleError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        let mut dealer = self.dealer.lock();

        while !self.dealer_stands(dealer.hand().value(), dealer.hand().is_soft()) {
            let card = self.draw();
            dealer.receive_card(card);
            drawn_cards.push(card);
        }

        tracing::debug!(
            value = dealer.hand().value(),
            drawn = drawn_cards.len(),
            "dealer stands"
        );
        drop(dealer);

        *self.state.lock() = RoundState::Settlement;

        Ok(drawn_cards)
    }

    /// Settles every bet against the dealer's final hand.
    ///
    /// Pays winners, returns pushed stakes, and then removes every player who
    /// cannot cover the minimum bet any more (with the default minimum of 1,
    /// exactly those at 0). The table moves back to [`RoundState::Init`], or
    /// to [`RoundState::Terminal`] once nobody is left.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished playing.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn settle(&self) -> Result<RoundResult, SettleError> {
        let mut state = self.state.lock();
        if *state != RoundState::Settlement {
            return Err(SettleError::InvalidState);
        }

        let dealer_hand = self.dealer.lock().hand().clone();
        let dealer_value = dealer_hand.value();
        let dealer_bust = dealer_hand.is_bust();
        let dealer_blackjack = dealer_hand.is_blackjack();

        let mut seats = self.seats.lock();
        let mut player_results = Vec::with_capacity(seats.players.len());

        for player in &mut seats.players {
            let outcome = HandOutcome::resolve(player.hand(), &dealer_hand);
            let bet = player.current_bet();

            let payout = match outcome {
                HandOutcome::Blackjack => player.win_blackjack(
                    self.options.blackjack_pays,
                    self.options.rounding_blackjack,
                ),
                HandOutcome::Win => player.win_even(),
                HandOutcome::Push => player.push(),
                HandOutcome::Lose => 0,
            };

            tracing::info!(
                player = player.name(),
                ?outcome,
                bet,
                payout,
                bankroll = player.bankroll(),
                "settled"
            );

            player_results.push(PlayerResult {
                name: player.name().into(),
                outcome,
                bet,
                payout,
                player_value: player.hand().value(),
                bankroll: player.bankroll(),
            });
        }

        let minimum = self.options.minimum_bet;
        let eliminated = seats.remove_where(|p| p.bankroll() < minimum);
        for name in &eliminated {
            tracing::info!(player = name.as_str(), "eliminated");
        }

        *state = if seats.players.is_empty() {
            RoundState::Terminal
        } else {
            RoundState::Init
        };

        Ok(RoundResult {
            players: player_results,
            dealer_value,
            dealer_bust,
            dealer_blackjack,
            eliminated,
        })
    }
}
