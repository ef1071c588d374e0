//! Settlement outcomes and round results.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::Hand;

/// Result of a single player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins even money.
    Win,
    /// Player wins with a natural and is paid the blackjack rate.
    Blackjack,
    /// Tie; the stake is returned.
    Push,
    /// Player loses the stake.
    Lose,
}

impl HandOutcome {
    /// Resolves `player` against the dealer's final hand.
    ///
    /// A two-card 21 is checked before any total comparison, so a player's
    /// blackjack beats a dealer 21 made from three or more cards and only
    /// pushes against a dealer blackjack.
    #[must_use]
    pub fn resolve(player: &Hand, dealer: &Hand) -> Self {
        let player_blackjack = player.is_blackjack();
        let player_value = player.value();

        if dealer.is_bust() {
            return if player_blackjack {
                Self::Blackjack
            } else if player_value <= 21 {
                Self::Win
            } else {
                Self::Lose
            };
        }

        if dealer.is_blackjack() {
            return if player_blackjack {
                Self::Push
            } else {
                Self::Lose
            };
        }

        let dealer_value = dealer.value();
        if player_blackjack {
            Self::Blackjack
        } else if player_value > 21 || player_value < dealer_value {
            Self::Lose
        } else if player_value > dealer_value {
            Self::Win
        } else {
            Self::Push
        }
    }
}

/// Result for a single player after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The amount staked this round.
    pub bet: usize,
    /// The amount credited back to the bankroll (stake included).
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// Bankroll after the payout.
    pub bankroll: usize,
}

impl PlayerResult {
    /// Net result of the round (positive = profit, negative = loss).
    #[expect(clippy::cast_possible_wrap, reason = "bankroll values fit in isize")]
    #[must_use]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }

    /// Human-readable line describing the outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self.outcome {
            HandOutcome::Blackjack => format!(
                "{} got blackjack and won {} dollars!",
                self.name, self.payout
            ),
            HandOutcome::Win => format!("{} won {} dollars", self.name, self.payout),
            HandOutcome::Push => {
                format!("{} tied the dealer and got their bet back", self.name)
            }
            HandOutcome::Lose => format!("{} lost their bet", self.name),
        }
    }
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Players who ran out of money and left the table.
    pub eliminated: Vec<String>,
}

impl RoundResult {
    /// Returns the result for `name`, if that player took part.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerResult> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Returns whether `name` left the table at the end of this round.
    #[must_use]
    pub fn is_eliminated(&self, name: &str) -> bool {
        self.eliminated.iter().any(|n| n == name)
    }

    /// Ordered settlement narration for the presentation layer.
    ///
    /// Dealer headline (if any), one line per player outcome, then a status
    /// block with each player's bankroll or elimination.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.players.len() * 2 + 2);

        if self.dealer_bust {
            lines.push(String::from("Dealer busted"));
        } else if self.dealer_blackjack {
            lines.push(String::from("Dealer got blackjack!"));
        }

        lines.extend(self.players.iter().map(PlayerResult::message));

        lines.push(String::from("Current status:"));
        for player in &self.players {
            if self.is_eliminated(&player.name) {
                lines.push(format!(
                    "{} has lost all their money and left the table",
                    player.name
                ));
            } else {
                lines.push(format!("{} has {} dollars", player.name, player.bankroll));
            }
        }

        lines
    }
}
