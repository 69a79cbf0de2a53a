use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, Evaluation};

/// Strategy pattern: each category detector knows how to detect and build its evaluation.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation;
}

// ============================================================================
// Suit/sequence detectors. Tie-break is the rank of the first card as given.
// ============================================================================

/// Royal Flush: Ten through Ace, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_royal && analysis.suit_info.is_flush
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::RoyalFlush, analysis.lead_rank)
    }
}

/// Straight Flush: a straight with all five cards of the same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight && analysis.suit_info.is_flush
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::StraightFlush, analysis.lead_rank)
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::Flush, analysis.lead_rank)
    }
}

/// Straight: highest rank four above the lowest, or the wheel
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::Straight, analysis.lead_rank)
    }
}

// ============================================================================
// Rank-group detectors. Tie-break is the rank of the first group encountered.
// ============================================================================

fn grouped(analysis: &HandAnalysis, category: Category) -> Evaluation {
    let lead = analysis.rank_groups.lead_rank().unwrap_or(analysis.lead_rank);
    analysis.build_evaluation(category, lead)
}

/// Four of a Kind: two distinct ranks, one of them four times.
/// Five cards of one rank (only possible with duplicates) also land here.
pub struct FourOfKindDetector;

impl CategoryDetector for FourOfKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.largest() >= 4
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        grouped(analysis, Category::FourOfKind)
    }
}

/// Full House: two distinct ranks, three and two
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.len() == 2 && analysis.rank_groups.largest() == 3
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        grouped(analysis, Category::FullHouse)
    }
}

/// Three of a Kind: three distinct ranks, one of them three times
pub struct ThreeOfKindDetector;

impl CategoryDetector for ThreeOfKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.len() == 3 && analysis.rank_groups.has_group_of(3)
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        grouped(analysis, Category::ThreeOfKind)
    }
}

/// Two Pair: three distinct ranks, two of them paired
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.len() == 3 && !analysis.rank_groups.has_group_of(3)
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        grouped(analysis, Category::TwoPair)
    }
}

/// One Pair: four distinct ranks
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.len() == 4
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        grouped(analysis, Category::OnePair)
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        grouped(analysis, Category::HighCard)
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FlushDetector,
    &StraightDetector,
    &FourOfKindDetector,
    &FullHouseDetector,
    &ThreeOfKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::hand::Hand;

    fn analyze(s: &str) -> HandAnalysis {
        let hand: Hand = s.parse().expect("valid hand");
        let cards: [Card; 5] = *hand.cards();
        HandAnalysis::new(&cards)
    }

    #[test]
    fn test_royal_flush_detector() {
        let analysis = analyze("TS JS QS KS AS");
        assert!(RoyalFlushDetector.detect(&analysis));
        let eval = RoyalFlushDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::RoyalFlush);
        assert_eq!(eval.tiebreak, 9);
    }

    #[test]
    fn test_royal_needs_flush() {
        let analysis = analyze("TS JS QS KS AH");
        assert!(!RoyalFlushDetector.detect(&analysis));
        assert!(StraightDetector.detect(&analysis));
    }

    #[test]
    fn test_straight_flush_detector() {
        let analysis = analyze("2H 3H 4H 5H 6H");
        assert!(!RoyalFlushDetector.detect(&analysis));
        assert!(StraightFlushDetector.detect(&analysis));
        let eval = StraightFlushDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::StraightFlush);
        assert_eq!(eval.tiebreak, 1);
    }

    #[test]
    fn test_flush_tiebreak_is_first_card() {
        let analysis = analyze("4D AD 9D 7D 2D");
        assert!(FlushDetector.detect(&analysis));
        let eval = FlushDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::Flush);
        assert_eq!(eval.tiebreak, 3);
    }

    #[test]
    fn test_wheel_straight_detector() {
        let analysis = analyze("AH 2D 3C 4S 5H");
        assert!(StraightDetector.detect(&analysis));
        let eval = StraightDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::Straight);
        assert_eq!(eval.tiebreak, 13);
    }

    #[test]
    fn test_four_of_kind_detector() {
        let analysis = analyze("KS AS AH AD AC");
        assert!(FourOfKindDetector.detect(&analysis));
        assert!(!FullHouseDetector.detect(&analysis));
        let eval = FourOfKindDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::FourOfKind);
        assert_eq!(eval.tiebreak, 12);
    }

    #[test]
    fn test_full_house_detector() {
        let analysis = analyze("QC KS KH KD QS");
        assert!(FullHouseDetector.detect(&analysis));
        assert!(!FourOfKindDetector.detect(&analysis));
        let eval = FullHouseDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::FullHouse);
        assert_eq!(eval.tiebreak, 11);
    }

    #[test]
    fn test_three_of_kind_detector() {
        let analysis = analyze("9C JS JH JD 2S");
        assert!(ThreeOfKindDetector.detect(&analysis));
        assert!(!TwoPairDetector.detect(&analysis));
        let eval = ThreeOfKindDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::ThreeOfKind);
        assert_eq!(eval.tiebreak, 8);
    }

    #[test]
    fn test_two_pair_detector() {
        let analysis = analyze("QS AS AH KD KC");
        assert!(TwoPairDetector.detect(&analysis));
        assert!(!ThreeOfKindDetector.detect(&analysis));
        let eval = TwoPairDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::TwoPair);
        assert_eq!(eval.tiebreak, 11);
    }

    #[test]
    fn test_one_pair_detector() {
        let analysis = analyze("JS JH 9D 7C 2S");
        assert!(OnePairDetector.detect(&analysis));
        let eval = OnePairDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::OnePair);
        assert_eq!(eval.tiebreak, 10);
    }

    #[test]
    fn test_high_card_detector() {
        let analysis = analyze("KS 2H 5C JD TD");
        assert!(HighCardDetector.detect(&analysis));
        assert!(!OnePairDetector.detect(&analysis));
        let eval = HighCardDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::HighCard);
        assert_eq!(eval.tiebreak, 12);
    }

    #[test]
    fn test_paired_span_of_four_takes_straight_before_groups() {
        let analysis = analyze("5H 5D 6S 7C 9D");
        assert!(OnePairDetector.detect(&analysis));
        let first = DETECTORS.iter().position(|d| d.detect(&analysis));
        assert_eq!(first, Some(3));
    }

    #[test]
    fn test_detectors_are_in_priority_order() {
        let analysis = analyze("2H 3H 4H 5H 6H");
        let first = DETECTORS.iter().position(|d| d.detect(&analysis));
        assert_eq!(first, Some(1));
    }
}
