//! A multi-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] that owns a self-refilling [`Deck`], the
//! dealer and the seated players, and walks each round through betting,
//! dealing, player turns, the dealer's turn and settlement. [`Session`]
//! drives repeated rounds against any front-end that implements
//! [`TableIo`].
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Table, TableOptions};
//!
//! let options = TableOptions::default();
//! let table = Table::new(options, 42);
//! let _ = table;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod session;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{Deck, Shoe};
pub use error::{ActionError, BetError, DealError, JoinError, ParseActionError, SettleError};
pub use hand::{Hand, is_blackjack, score};
pub use options::{Payout, RoundingMode, TableOptions};
pub use participant::Participant;
pub use result::{HandOutcome, PlayerResult, RoundResult};
pub use session::{Session, TableIo};
pub use table::{Action, DEALER_NAME, RoundState, Table};
