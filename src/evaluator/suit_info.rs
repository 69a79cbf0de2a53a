use crate::cards::Suit;

/// Information about whether all cards share the same suit (flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
}

impl SuitInfo {
    /// Detect a flush from suits sorted ascending: first and last must match.
    pub fn detect(sorted_suits: &[Suit; 5]) -> Self {
        SuitInfo { is_flush: sorted_suits[0] == sorted_suits[4] }
    }
}
