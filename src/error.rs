//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Bet is below the table minimum (zero included).
    #[error("bet is below the table minimum")]
    BelowMinimum,
    /// Bet exceeds the player's bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The player has already bet this round.
    #[error("bet already placed this round")]
    AlreadyPlaced,
    /// Invalid table state for betting.
    #[error("invalid table state for betting")]
    InvalidState,
    /// No players are seated.
    #[error("no players are seated")]
    NoPlayers,
}

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// A player with this name is already seated.
    #[error("a player with this name is already seated")]
    DuplicateName,
    /// The starting bankroll cannot cover the minimum bet.
    #[error("bankroll cannot cover the minimum bet")]
    InsufficientBankroll,
    /// Players can only join between rounds.
    #[error("invalid table state for joining")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid table state for dealing.
    #[error("invalid table state for dealing")]
    InvalidState,
    /// No players are seated.
    #[error("no players are seated")]
    NoPlayers,
    /// At least one seated player has not placed a bet.
    #[error("not every player has placed a bet")]
    MissingBets,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid table state for this action.
    #[error("invalid table state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur during the dealer's turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid table state for this step.
    #[error("invalid table state for settlement")]
    InvalidState,
}

/// Error returned when a decision string is neither hit nor stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected `hit` or `stay`")]
pub struct ParseActionError;
