//! Table configuration options.

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down (truncate).
    #[default]
    Down,
    /// Round to nearest, halves rounding up.
    Nearest,
}

/// A payout ratio expressed as `numerator : denominator` winnings per unit bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Payout {
    /// Winnings per `denominator` units staked.
    pub numerator: usize,
    /// Units staked per `numerator` units won. Must be non-zero.
    pub denominator: usize,
}

impl Payout {
    /// The standard 3:2 blackjack payout.
    pub const THREE_TO_TWO: Self = Self::new(3, 2);

    /// Even money, 1:1.
    pub const EVEN: Self = Self::new(1, 1);

    /// Creates a new payout ratio.
    #[must_use]
    pub const fn new(numerator: usize, denominator: usize) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the winnings on `bet`, excluding the returned stake.
    ///
    /// Integer arithmetic only; the remainder is resolved by `mode`.
    /// Saturates at `usize::MAX` instead of overflowing.
    ///
    /// ```
    /// use bjtable::{Payout, RoundingMode};
    ///
    /// assert_eq!(Payout::THREE_TO_TWO.winnings(5, RoundingMode::Down), 7);
    /// assert_eq!(Payout::THREE_TO_TWO.winnings(5, RoundingMode::Up), 8);
    /// ```
    #[must_use]
    pub const fn winnings(self, bet: usize, mode: RoundingMode) -> usize {
        if self.denominator == 0 {
            return 0;
        }
        // bet * n / d, split so that only the fractional part is scaled
        let rest = (bet % self.denominator).saturating_mul(self.numerator);
        let whole = (bet / self.denominator)
            .saturating_mul(self.numerator)
            .saturating_add(rest / self.denominator);
        let remainder = rest % self.denominator;
        if remainder == 0 {
            return whole;
        }
        match mode {
            RoundingMode::Down => whole,
            RoundingMode::Up => whole.saturating_add(1),
            RoundingMode::Nearest => {
                if remainder >= self.denominator - remainder {
                    whole.saturating_add(1)
                } else {
                    whole
                }
            }
        }
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{Payout, TableOptions};
///
/// let options = TableOptions::default()
///     .with_minimum_bet(5)
///     .with_blackjack_pays(Payout::new(6, 5))
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Smallest accepted bet.
    pub minimum_bet: usize,
    /// Blackjack payout ratio (typically 3:2).
    pub blackjack_pays: Payout,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Total at which the dealer stops drawing.
    pub dealer_stands_on: u8,
    /// Whether the dealer stands on a soft total equal to `dealer_stands_on`.
    pub stand_on_soft_17: bool,
    /// Nominal dealer bankroll. It is never spent or checked.
    pub dealer_bankroll: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            minimum_bet: 1,
            blackjack_pays: Payout::THREE_TO_TWO,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            dealer_bankroll: 1,
        }
    }
}

impl TableOptions {
    /// Sets the minimum bet. Values below 1 are raised to 1.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_minimum_bet(0);
    /// assert_eq!(options.minimum_bet, 1);
    /// ```
    #[must_use]
    pub const fn with_minimum_bet(mut self, minimum_bet: usize) -> Self {
        self.minimum_bet = if minimum_bet == 0 { 1 } else { minimum_bet };
        self
    }

    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, payout: Payout) -> Self {
        self.blackjack_pays = payout;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the total at which the dealer stands.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the dealer's nominal bankroll.
    #[must_use]
    pub const fn with_dealer_bankroll(mut self, bankroll: usize) -> Self {
        self.dealer_bankroll = bankroll;
        self
    }
}
