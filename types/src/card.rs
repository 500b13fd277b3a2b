use serde::{Deserialize, Serialize};

/// Rank name of the target card.
pub const QUEEN: &str = "QUEEN";

/// A single playing card as reported by the deck service.
///
/// The wire format carries more fields (image URLs in several sizes); only
/// the fields the game reads are modeled, and the rest are dropped during
/// deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Compact rank+suit identifier, e.g. "QH".
    pub code: String,
    /// Rank name, e.g. "QUEEN" or "7".
    pub value: String,
    /// Suit name, e.g. "HEARTS".
    pub suit: String,
}

impl Card {
    pub fn new(
        code: impl Into<String>,
        value: impl Into<String>,
        suit: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
            suit: suit.into(),
        }
    }

    pub fn is_queen(&self) -> bool {
        self.value == QUEEN
    }

    /// Rendering used in round transcripts, e.g. "QUEEN of SPADES".
    pub fn describe(&self) -> String {
        format!("{} of {}", self.value, self.suit)
    }
}

/// 1-based position of the first queen in a drawn sequence.
///
/// A well-behaved deck yields at most one queen in a short draw, but the
/// scan stays total under duplicates: the first match in draw order wins.
pub fn queen_position(cards: &[Card]) -> Option<u32> {
    cards
        .iter()
        .position(Card::is_queen)
        .map(|index| index as u32 + 1)
}
