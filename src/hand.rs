//! Hand scoring and the hand container shared by players and the dealer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{ACE, Card, JACK, KING, TEN};

const fn card_value(rank: u8) -> u8 {
    match rank {
        ACE => 11,
        2..=TEN => rank,
        JACK..=KING => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == ACE {
            aces = aces.saturating_add(1);
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Returns the best blackjack total for `cards`.
///
/// Aces start at 11 and are demoted to 1, one at a time, while the total is
/// over 21. The result is the highest total not above 21 when one exists,
/// otherwise the total with every ace counted as 1.
///
/// ```
/// use bjtable::card::{ACE, KING, Card, Suit};
/// use bjtable::hand::score;
///
/// let cards = [Card::new(ACE, Suit::Spades), Card::new(KING, Suit::Hearts)];
/// assert_eq!(score(&cards), 21);
/// assert_eq!(score(&[]), 0);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether `cards` is a natural: exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == 21
}

/// Returns whether `cards` still counts an ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// An ordered hand of cards. Insertion order is deal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, which is the dealer's up-card.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
