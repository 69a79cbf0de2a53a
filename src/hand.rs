use crate::cards::{Card, CardParseError};
use crate::evaluator::{self, Evaluation, Outcome};
use std::fmt;
use std::str::FromStr;

/// Length of an encoded hand: five two-char cards and four separators.
pub const ENCODED_LEN: usize = 14;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("invalid hand: expected 14 characters, got {0}")]
    InvalidHand(usize),
    #[error("invalid card: {0}")]
    InvalidCard(#[from] CardParseError),
}

/// Five cards in the order they were dealt or parsed.
///
/// Duplicate cards are not rejected.
///
/// ```
/// use poker_hand::hand::Hand;
///
/// let hand: Hand = "KS 2H 5C JD TD".parse().unwrap();
/// assert_eq!(hand.to_string(), "KS 2H 5C JD TD");
/// assert_eq!(hand.rank_sum(), 12 + 1 + 4 + 10 + 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; 5]);

impl Hand {
    pub const fn new(cards: [Card; 5]) -> Self {
        Self(cards)
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }

    /// Sum of the five raw rank values, the last comparison level.
    pub fn rank_sum(&self) -> u32 {
        self.0.iter().map(|c| u32::from(c.rank().value())).sum()
    }

    /// Classify this hand. Pure; repeated calls return the same result.
    pub fn evaluate(&self) -> Evaluation {
        evaluator::evaluate(self)
    }

    /// Outcome of this hand against `other`.
    pub fn compare_with(&self, other: &Hand) -> Outcome {
        evaluator::compare(self, other)
    }
}

impl From<[Card; 5]> for Hand {
    fn from(cards: [Card; 5]) -> Self {
        Self(cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ENCODED_LEN {
            return Err(HandError::InvalidHand(s.len()));
        }
        // Cards sit at offsets 0, 3, 6, 9, 12; separators are not inspected.
        let bytes = s.as_bytes();
        let card = |i: usize| Card::from_chars(char::from(bytes[i]), char::from(bytes[i + 1]));
        Ok(Self([card(0)?, card(3)?, card(6)?, card(9)?, card(12)?]))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
