//! Players and the dealer: a name, a bankroll, a hand and the current bet.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::card::Card;
use crate::error::BetError;
use crate::hand::Hand;
use crate::options::{Payout, RoundingMode};

/// A seat at the table.
///
/// A placed bet is held in escrow: it leaves the bankroll when the bet is
/// placed and the payout methods credit the stake back together with any
/// winnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    bankroll: usize,
    hand: Hand,
    current_bet: usize,
}

impl Participant {
    /// Creates a participant with an empty hand and no bet.
    #[must_use]
    pub fn new(name: impl Into<String>, bankroll: usize) -> Self {
        Self {
            name: name.into(),
            bankroll,
            hand: Hand::new(),
            current_bet: 0,
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bankroll, excluding any bet in escrow.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the bet placed this round, or 0.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Places a bet of `amount`, moving it from the bankroll into escrow.
    ///
    /// Returns the amount staked. On error the bankroll and bet are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::BelowMinimum`] when `amount` is zero, and
    /// [`BetError::InsufficientFunds`] when it exceeds the bankroll.
    pub const fn place_bet(&mut self, amount: usize) -> Result<usize, BetError> {
        if amount == 0 {
            return Err(BetError::BelowMinimum);
        }
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        self.bankroll -= amount;
        self.current_bet = amount;
        Ok(amount)
    }

    /// Pays an even-money win: the stake plus the same again.
    ///
    /// Credits saturate at `usize::MAX`, as do the other payouts.
    ///
    /// Returns the amount credited.
    pub const fn win_even(&mut self) -> usize {
        let credited = self.current_bet.saturating_mul(2);
        self.bankroll = self.bankroll.saturating_add(credited);
        credited
    }

    /// Pays a blackjack win: the stake plus `payout` winnings.
    ///
    /// With a 3:2 payout rounded down this credits `floor(bet * 2.5)`.
    /// Returns the amount credited.
    pub const fn win_blackjack(&mut self, payout: Payout, rounding: RoundingMode) -> usize {
        let credited = self
            .current_bet
            .saturating_add(payout.winnings(self.current_bet, rounding));
        self.bankroll = self.bankroll.saturating_add(credited);
        credited
    }

    /// Returns the stake on a tie. Returns the amount credited.
    pub const fn push(&mut self) -> usize {
        self.bankroll = self.bankroll.saturating_add(self.current_bet);
        self.current_bet
    }

    /// Forgets the current bet without crediting anything.
    pub const fn clear_bet(&mut self) {
        self.current_bet = 0;
    }

    /// Discards every card in the hand.
    pub fn discard_hand(&mut self) {
        self.hand.clear();
    }

    /// Appends a card to the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {} dollars", self.name, self.bankroll)
    }
}
