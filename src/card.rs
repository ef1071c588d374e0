//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in the order a fresh deck is filled.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Hearts, Self::Clubs, Self::Spades];

    /// Single-letter symbol (`D`, `H`, `C`, `S`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a ten.
pub const TEN: u8 = 10;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card (1 = Ace, 10 = Ten, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Single-character rank symbol (`A`, `2`..`9`, `T`, `J`, `Q`, `K`).
    ///
    /// Out-of-range ranks render as `?`.
    #[must_use]
    pub const fn rank_symbol(self) -> char {
        match self.rank {
            ACE => 'A',
            2..=9 => (b'0' + self.rank) as char,
            TEN => 'T',
            JACK => 'J',
            QUEEN => 'Q',
            KING => 'K',
            _ => '?',
        }
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == ACE
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
