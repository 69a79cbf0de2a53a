use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation};

/// Pre-computed analysis of a 5-card hand.
/// Built fresh for every evaluation and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Rank of the first card in input order.
    pub lead_rank: Rank,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let ranks = cards.map(Card::rank);
        let suits = cards.map(Card::suit);

        // Ranks and suits are sorted independently.
        let mut sorted_ranks = ranks;
        sorted_ranks.sort_unstable();
        let mut sorted_suits = suits;
        sorted_suits.sort_unstable();

        Self {
            lead_rank: ranks[0],
            rank_groups: RankGroups::from_ranks(&ranks),
            suit_info: SuitInfo::detect(&sorted_suits),
            straight_info: StraightInfo::detect(&sorted_ranks),
        }
    }

    pub fn build_evaluation(&self, category: Category, tiebreak: Rank) -> Evaluation {
        Evaluation { category, tiebreak: tiebreak.value() }
    }
}
