//! Round state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Between rounds; players may join or leave.
    Init,
    /// Accepting bets for the next round.
    Betting,
    /// Dealing initial cards.
    Dealing,
    /// Players act in seat order.
    PlayerTurns,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Dealer has finished; bets can be settled.
    Settlement,
    /// The session is over.
    Terminal,
}

impl RoundState {
    /// Returns whether no further rounds can be played.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminal)
    }
}
