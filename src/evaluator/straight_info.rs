use crate::cards::Rank;

/// Straight shape of a hand, read off its ascending ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// Lowest rank is Ten and highest is Ace.
    pub is_royal: bool,
}

impl StraightInfo {
    /// Detect a straight from ranks sorted ascending.
    ///
    /// Only the extremes are compared (`max == min + 4`), so a paired hand
    /// spanning four ranks counts as a straight. The wheel (A-2-3-4-5) is
    /// matched separately, Ace playing low.
    pub fn detect(sorted_ranks: &[Rank; 5]) -> Self {
        let low = sorted_ranks[0];
        let high = sorted_ranks[4];

        let spans_four = high.value() == low.value() + 4;
        let is_wheel = sorted_ranks == &[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];
        let is_royal = low == Rank::Ten && high == Rank::Ace;

        StraightInfo { is_straight: spans_four || is_wheel, is_royal }
    }
}
