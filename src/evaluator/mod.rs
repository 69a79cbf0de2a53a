pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Two-letter code, e.g. `TP` for two pair and `RS` for a royal straight flush.
    pub const fn code(self) -> &'static str {
        match self {
            Category::HighCard => "HC",
            Category::OnePair => "OP",
            Category::TwoPair => "TP",
            Category::ThreeOfKind => "TK",
            Category::Straight => "ST",
            Category::Flush => "FL",
            Category::FullHouse => "FH",
            Category::FourOfKind => "FK",
            Category::StraightFlush => "SF",
            Category::RoyalFlush => "RS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfKind => "four of a kind",
            Category::StraightFlush => "straight flush",
            Category::RoyalFlush => "royal flush",
        };
        f.write_str(name)
    }
}

/// Category plus a single tie-break rank value.
///
/// The tie-break is not the highest card: straights and flushes carry the
/// rank of the first card as given, grouped hands carry the rank of the first
/// group encountered while scanning the cards in order. Ordering is by
/// category, then tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Evaluation {
    pub category: Category,
    pub tiebreak: u8,
}

/// Result of a head-to-head comparison, from the left hand's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }

    /// The same outcome seen from the other hand.
    pub const fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => f.write_str("WIN"),
            Outcome::Loss => f.write_str("LOSS"),
        }
    }
}

/// Classify a five-card hand.
///
/// ```
/// use poker_hand::evaluator::{evaluate, Category};
/// use poker_hand::hand::Hand;
///
/// let hand: Hand = "TS JS QS KS AS".parse().unwrap();
/// assert_eq!(evaluate(&hand).category, Category::RoyalFlush);
/// ```
pub fn evaluate(hand: &Hand) -> Evaluation {
    use detector::{HighCardDetector, DETECTORS};
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(hand.cards());

    // First match in priority order wins; grouping always classifies.
    let detector =
        DETECTORS.iter().copied().find(|d| d.detect(&analysis)).unwrap_or(&HighCardDetector);
    let eval = detector.build_evaluation(&analysis);
    log::trace!("{hand}: {} (tiebreak {})", eval.category, eval.tiebreak);
    eval
}

/// Compare `left` against `right`.
///
/// Levels: category, then tie-break, then the sum of the raw rank values.
/// When all three are equal the left hand wins; there is no tie.
///
/// ```
/// use poker_hand::evaluator::{compare, Outcome};
/// use poker_hand::hand::Hand;
///
/// let a: Hand = "KS 2H 5C JD TD".parse().unwrap();
/// let b: Hand = "9C 9H 5C 5H AC".parse().unwrap();
/// assert_eq!(compare(&a, &b), Outcome::Loss);
/// ```
pub fn compare(left: &Hand, right: &Hand) -> Outcome {
    let l = evaluate(left);
    let r = evaluate(right);

    let (level, ord) = match l.category.cmp(&r.category) {
        Ordering::Equal => match l.tiebreak.cmp(&r.tiebreak) {
            Ordering::Equal => ("rank sum", left.rank_sum().cmp(&right.rank_sum())),
            ord => ("tiebreak", ord),
        },
        ord => ("category", ord),
    };

    let outcome = if ord.is_lt() { Outcome::Loss } else { Outcome::Win };
    log::debug!("{left} vs {right}: {outcome} on {level} ({ord:?})");
    outcome
}
