//! The card source used by a table.

extern crate alloc;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A source of cards for the round engine.
///
/// Drawing never fails: an implementation that runs dry must refill itself.
pub trait Shoe {
    /// Repopulates the shoe with a full set of cards.
    fn reset(&mut self);

    /// Randomizes the order of the remaining cards.
    fn shuffle(&mut self);

    /// Removes and returns the top card, refilling first if the shoe is empty.
    fn draw_top(&mut self) -> Card;

    /// Returns the number of cards left before the next refill.
    fn remaining(&self) -> usize;
}

/// A single 52-card deck that silently refills and reshuffles when empty.
///
/// Cards are stored so that the top of the deck is the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
    reshuffles: usize,
}

impl Deck {
    /// Creates a full, shuffled deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
            reshuffles: 0,
        };
        deck.reset();
        deck.shuffle();
        deck
    }

    /// Creates a deck whose next draws are exactly `draws`, in order.
    ///
    /// Once those cards run out the deck refills from `seed` like any other.
    #[must_use]
    pub fn stacked(draws: &[Card], seed: u64) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
            reshuffles: 0,
        }
    }

    /// Returns how many times the deck has refilled itself on an empty draw.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }

    /// Returns the remaining cards, top card first.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().rev().copied().collect()
    }
}

impl Shoe for Deck {
    fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in 1..=13 {
                self.cards.push(Card::new(rank, suit));
            }
        }
        // Top of the deck is the end of the vector.
        self.cards.reverse();
    }

    fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    fn draw_top(&mut self) -> Card {
        if let Some(card) = self.cards.pop() {
            return card;
        }

        self.reset();
        self.shuffle();
        self.reshuffles += 1;
        tracing::debug!(reshuffles = self.reshuffles, "deck empty, refilled and reshuffled");

        // reset() always leaves DECK_SIZE cards, so this recurses at most once.
        self.draw_top()
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
